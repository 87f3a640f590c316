use leptos::*;

// Step copy mirrors the in-app onboarding flow; order matters.
const STEPS: &[(&str, &str)] = &[
    (
        "アカウント作成と認証",
        "メールアドレスまたはGoogleアカウントでサインアップし、プロフィールを設定します。アプリ初回起動時に通知権限を許可すると、撮影リマインダーを受け取れます。",
    ),
    (
        "日々の部屋撮影",
        "カスタムカメラUIで部屋の写真を撮影します。撮影前にプレビューして、満足できない場合は再撮影可能です。写真は24時間後に自動的に期限切れになります。",
    ),
    (
        "AI分析結果の確認",
        "AIが清潔さ、整理整頓、照明を分析し、0-100ポイントのスコアを提供します。色分けされた評価（緑：優秀、青：良好、オレンジ：改善が必要、赤：不良）で一目で状況を把握できます。",
    ),
    (
        "改善タスクの実行",
        "AIが生成した具体的な改善タスクを確認し、24時間以内に完了を目指します。完了したタスクはチェックオフでき、進捗統計に反映されます。",
    ),
    (
        "友達との進捗共有",
        "ソーシャルタブから友達を検索・フォローし、リアルタイムフィードで日々の評価を共有します。コメントやいいねでお互いを励まし合い、継続的なモチベーションを維持できます。",
    ),
    (
        "進捗の追跡と分析",
        "カレンダービューで過去の写真とスコアを確認し、週間統計で平均スコアや連続記録をチェックします。アチーブメントシステムで達成した改善マイルストーンを確認できます。",
    ),
];

const STEP_COLORS: &[&str] = &[
    "bg-blue-600",
    "bg-purple-600",
    "bg-green-600",
    "bg-orange-600",
    "bg-indigo-600",
    "bg-yellow-600",
];

#[component]
pub fn UsageSection() -> impl IntoView {
    let steps: Vec<_> = STEPS
        .iter()
        .enumerate()
        .map(|(index, (title, body))| {
            let color = STEP_COLORS[index % STEP_COLORS.len()];
            view! {
                <div class="flex items-start space-x-6 bg-white p-8 rounded-2xl shadow-sm">
                    <div class=format!("w-12 h-12 {color} rounded-full flex items-center justify-center flex-shrink-0")>
                        <span class="text-white font-bold">{index + 1}</span>
                    </div>
                    <div>
                        <h4 class="text-xl font-semibold text-gray-900 mb-3">{*title}</h4>
                        <p class="text-gray-600 leading-relaxed">{*body}</p>
                    </div>
                </div>
            }
        })
        .collect();

    view! {
        <section id="usage" class="py-16 bg-gray-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h3 class="text-3xl font-bold text-gray-900 mb-4">"アプリの使い方"</h3>
                    <p class="text-lg text-gray-600">"簡単なステップでNeatifyを始めましょう"</p>
                </div>
                <div class="space-y-8">{steps}</div>
            </div>
        </section>
    }
}
