use crate::icons::{BarChartIcon, BellIcon, BrainIcon, CalendarIcon, CameraIcon, UsersIcon};
use leptos::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h3 class="text-3xl font-bold text-gray-900 mb-4">"Neatifyの主要機能"</h3>
                    <p class="text-lg text-gray-600">"AIと社会的動機で部屋を清潔に保つ"</p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <FeatureCard
                        card_class="bg-gradient-to-br from-blue-50 to-blue-100"
                        icon_class="bg-blue-600"
                        title="AI部屋審査"
                        body="清潔さ、整理整頓、照明を分析し、0-100ポイントのスコアとパーソナライズされた改善タスクを提供"
                    >
                        <BrainIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                    <FeatureCard
                        card_class="bg-gradient-to-br from-purple-50 to-purple-100"
                        icon_class="bg-purple-600"
                        title="日々の写真撮影"
                        body="24時間サイクルで部屋の写真を撮影し、BeRealスタイルの一時的共有で継続的な動機を維持"
                    >
                        <CameraIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                    <FeatureCard
                        card_class="bg-gradient-to-br from-green-50 to-green-100"
                        icon_class="bg-green-600"
                        title="ソーシャル機能"
                        body="友達をフォローし、リアルタイムフィードで進捗を共有、アクティビティ通知でエンゲージメント向上"
                    >
                        <UsersIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                    <FeatureCard
                        card_class="bg-gradient-to-br from-orange-50 to-orange-100"
                        icon_class="bg-orange-600"
                        title="分析と追跡"
                        body="週間統計、連続記録追跡、進捗視覚化、アチーブメントシステムでモチベーション維持"
                    >
                        <BarChartIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                    <FeatureCard
                        card_class="bg-gradient-to-br from-indigo-50 to-indigo-100"
                        icon_class="bg-indigo-600"
                        title="カレンダービュー"
                        body="日々のサムネイル付き月間カレンダーで写真履歴とスコアタイムラインを確認"
                    >
                        <CalendarIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                    <FeatureCard
                        card_class="bg-gradient-to-br from-yellow-50 to-yellow-100"
                        icon_class="bg-yellow-600"
                        title="スマート通知"
                        body="24時間経過後の自動撮影リマインダーとカスタマイズ可能な通知設定"
                    >
                        <BellIcon class="w-6 h-6 text-white"/>
                    </FeatureCard>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    card_class: &'static str,
    icon_class: &'static str,
    title: &'static str,
    body: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("{card_class} p-8 rounded-2xl")>
            <div class=format!("w-12 h-12 {icon_class} rounded-xl flex items-center justify-center mb-4")>
                {children()}
            </div>
            <h4 class="text-xl font-semibold text-gray-900 mb-3">{title}</h4>
            <p class="text-gray-600">{body}</p>
        </div>
    }
}
