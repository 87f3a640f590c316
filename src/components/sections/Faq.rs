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

use crate::icons::ChevronDownIcon;
use leptos::*;

/// One question/answer pair. The list below is the whole FAQ; it is fixed
/// at build time and entries are addressed by position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Neatifyはどのように部屋を評価しますか？",
        answer: "NeatifyのAIは、清潔さ、整理整頓、照明を分析し、0-100ポイントのスコアを提供します。緑（80+）が優秀、青（60-79）が良好、オレンジ（40-59）が改善が必要、赤（40未満）が不良を示します。",
    },
    FaqEntry {
        question: "写真はいつまで表示されますか？",
        answer: "BeRealと同様に、すべての写真は24時間後に期限切れになります。これにより、フレッシュなコンテンツと継続的な参加が促進されます。",
    },
    FaqEntry {
        question: "友達を追加するにはどうすればよいですか？",
        answer: "アプリ内のソーシャルタブから友達を検索し、フォローできます。友達の日々の部屋評価をリアルタイムで確認し、お互いの進捗を励まし合えます。",
    },
    FaqEntry {
        question: "通知をオフにできますか？",
        answer: "はい、アカウント設定から通知をカスタマイズできます。24時間経過後の撮影リマインダーなど、すべての通知のON/OFF切り替えが可能です。",
    },
    FaqEntry {
        question: "AIが生成するタスクとは何ですか？",
        answer: "部屋の分析に基づいて、AIが具体的な改善提案を生成します。例えば「ベッドを整える」「本を整理する」など、24時間以内に完了できるタスクです。",
    },
    FaqEntry {
        question: "データは安全ですか？",
        answer: "はい、すべてのデータはFirebaseを使用して安全に暗号化され、プライバシー設定で共有レベルを管理できます。写真は24時間後に自動的に期限切れになります。",
    },
];

/// Which entry is expanded, if any. A single optional index is the whole
/// state, so "at most one panel open" cannot be violated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Collapse `index` if it is the open entry, otherwise make it the
    /// open entry (closing whatever was open before).
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[island]
pub fn FaqSection() -> impl IntoView {
    let accordion = create_rw_signal(Accordion::default());

    let entries: Vec<_> = FAQ_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_open = move || accordion.with(|a| a.is_open(index));
            view! {
                <div class="bg-gray-50 rounded-xl overflow-hidden">
                    <button
                        id=format!("faq-question-{index}")
                        class="w-full px-8 py-6 text-left flex items-center justify-between hover:bg-gray-100 transition-colors"
                        on:click=move |_| accordion.update(|a| a.toggle(index))
                    >
                        <h4 class="text-lg font-semibold text-gray-900">{entry.question}</h4>
                        <span class=move || format!(
                            "transition-transform {}",
                            if is_open() { "rotate-180" } else { "" }
                        )>
                            <ChevronDownIcon class="w-5 h-5 text-gray-500"/>
                        </span>
                    </button>
                    <Show when=is_open fallback=|| ()>
                        <div id=format!("faq-answer-{index}") class="px-8 pb-6">
                            <p class="text-gray-600 leading-relaxed">{entry.answer}</p>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect();

    view! {
        <section id="faq" class="py-16 bg-white">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h3 class="text-3xl font-bold text-gray-900 mb-4">"よくある質問"</h3>
                    <p class="text-lg text-gray-600">"Neatifyについてのよくある質問と回答"</p>
                </div>
                <div class="space-y-4">{entries}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_exactly_one_entry() {
        for i in 0..FAQ_ENTRIES.len() {
            let mut accordion = Accordion::default();
            accordion.toggle(i);
            for j in 0..FAQ_ENTRIES.len() {
                assert_eq!(accordion.is_open(j), i == j, "entry {j} after opening {i}");
            }
        }
    }

    #[test]
    fn toggling_the_open_entry_collapses_everything() {
        for i in 0..FAQ_ENTRIES.len() {
            let mut accordion = Accordion::default();
            accordion.toggle(i);
            accordion.toggle(i);
            for j in 0..FAQ_ENTRIES.len() {
                assert!(!accordion.is_open(j), "entry {j} should be collapsed");
            }
            assert_eq!(accordion, Accordion::default());
        }
    }

    #[test]
    fn opening_another_entry_moves_the_selection() {
        for i in 0..FAQ_ENTRIES.len() {
            for j in (0..FAQ_ENTRIES.len()).filter(|&j| j != i) {
                let mut accordion = Accordion::default();
                accordion.toggle(i);
                accordion.toggle(j);
                assert!(accordion.is_open(j), "{j} should be open after {i} -> {j}");
                assert!(!accordion.is_open(i), "{i} should have closed as a side effect");
            }
        }
    }

    #[test]
    fn default_is_fully_collapsed() {
        let accordion = Accordion::default();
        for i in 0..FAQ_ENTRIES.len() {
            assert!(!accordion.is_open(i));
        }
    }
}
