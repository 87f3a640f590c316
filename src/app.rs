/*
 * Copyright 2024 Neatify
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::pages::Home::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    let formatter = |text| format!("{text} - Neatify サポート");
    provide_meta_context();

    let json_ld = r#"
    {
        "@context": "https://schema.org",
        "@type": "MobileApplication",
        "name": "Neatify",
        "operatingSystem": "iOS, Android",
        "applicationCategory": "LifestyleApplication",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "JPY"
        },
        "description": "AIを使用して部屋の清潔さを評価し、友達と進捗を共有するソーシャル生産性アプリ。"
    }
    "#;

    view! {
        <Html lang="ja"/>
        <Stylesheet id="leptos" href="/pkg/neatify_support.css"/>
        <Title formatter/>
        <Meta
            name="description"
            content="AI搭載部屋審査アプリNeatifyの公式サポートサイト。使い方ガイド、よくある質問、お問い合わせ窓口をまとめています。"
        />
        <Meta
            name="keywords"
            content="Neatify, 部屋 審査 アプリ, AI 掃除, 片付け アプリ, サポート, よくある質問, お問い合わせ"
        />

        // Open Graph / Facebook
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content="Neatify サポート"/>
        <Meta property="og:url" content="https://support.neatify.app/"/>
        <Meta property="og:title" content="Neatify サポートセンター"/>
        <Meta property="og:description" content="AIを使用して部屋の清潔さを評価し、友達と進捗を共有するNeatifyのサポートサイトです。"/>

        // Twitter
        <Meta property="twitter:card" content="summary"/>
        <Meta property="twitter:site" content="@neatify_app"/>
        <Meta property="twitter:url" content="https://support.neatify.app/"/>
        <Meta property="twitter:title" content="Neatify サポートセンター"/>
        <Meta property="twitter:description" content="AI搭載部屋審査アプリNeatifyの使い方・FAQ・お問い合わせ。"/>

        <Router>
            <Routes>
                <Route path="" view=Home ssr=SsrMode::Async/>
            </Routes>
        </Router>
        <script type="application/ld+json">
            {json_ld}
        </script>
    }
}
