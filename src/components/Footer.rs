use crate::icons::{CameraIcon, MailIcon, TwitterIcon};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8 mb-8">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <div class="w-8 h-8 bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg flex items-center justify-center">
                                <CameraIcon class="w-5 h-5 text-white"/>
                            </div>
                            <span class="text-xl font-bold">"Neatify"</span>
                        </div>
                        <p class="text-gray-400 leading-relaxed">
                            "AIを活用した部屋審査で、清潔で整理された生活空間の維持をサポートします。"
                        </p>
                    </div>
                    <FooterColumn
                        heading="アプリ"
                        links=vec![
                            ("#", "機能紹介"),
                            ("#", "ダウンロード"),
                            ("#", "更新履歴"),
                            ("#", "システム要件"),
                        ]
                    />
                    <FooterColumn
                        heading="サポート"
                        links=vec![
                            ("#usage", "使い方"),
                            ("#faq", "よくある質問"),
                            ("#contact", "お問い合わせ"),
                            ("#", "トラブルシューティング"),
                        ]
                    />
                    <FooterColumn
                        heading="法的情報"
                        links=vec![
                            ("#", "利用規約"),
                            ("#", "プライバシーポリシー"),
                            ("#", "セキュリティ"),
                            ("#", "ライセンス"),
                        ]
                    />
                </div>
                <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm">
                        "© 2024 Neatify. All rights reserved."
                    </p>
                    <div class="flex space-x-6 mt-4 md:mt-0">
                        <a
                            href="https://twitter.com/neatify_app"
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label="Twitter"
                        >
                            <TwitterIcon class="w-5 h-5"/>
                        </a>
                        <a
                            href="mailto:support@neatify.app"
                            class="text-gray-400 hover:text-white transition-colors"
                            aria-label="メール"
                        >
                            <MailIcon class="w-5 h-5"/>
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(
    heading: &'static str,
    links: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let items: Vec<_> = links
        .into_iter()
        .map(|(href, label)| {
            view! {
                <li>
                    <a href=href class="hover:text-white transition-colors">
                        {label}
                    </a>
                </li>
            }
        })
        .collect();

    view! {
        <div>
            <h5 class="font-semibold mb-4">{heading}</h5>
            <ul class="space-y-2 text-gray-400">{items}</ul>
        </div>
    }
}
