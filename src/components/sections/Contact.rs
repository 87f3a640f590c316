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

use crate::icons::{MailIcon, PhoneIcon, SendIcon, TwitterIcon};
use leptos::*;
use serde::{Deserialize, Serialize};

/// The four recognized fields of the inquiry form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Maps an input's `name` attribute back to a field. Unknown names map
    /// to `None` so name-keyed callers can treat them as a no-op.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

/// Controlled state of the inquiry form. The DOM mirrors these values;
/// they never outlive the page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The record a mail/ticketing backend would accept. Nothing in this crate
/// transmits it; delivery belongs to an external service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Overwrite exactly one field; the other three are untouched.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All four fields are non-empty. The form's `required` attributes
    /// enforce the same precondition in the browser.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    /// Drain the form into a deliverable record, leaving every field empty.
    pub fn take_message(&mut self) -> ContactMessage {
        let drained = std::mem::take(self);
        ContactMessage {
            name: drained.name,
            email: drained.email,
            subject: drained.subject,
            message: drained.message,
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-16 bg-gradient-to-br from-blue-50 to-indigo-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h3 class="text-3xl font-bold text-gray-900 mb-4">"お問い合わせ"</h3>
                    <p class="text-lg text-gray-600">
                        "ご質問やご要望がございましたら、お気軽にお問い合わせください"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <ContactDetails/>
                    <div class="bg-white p-8 rounded-2xl shadow-sm">
                        <h4 class="text-2xl font-semibold text-gray-900 mb-6">
                            "お問い合わせフォーム"
                        </h4>
                        <InquiryForm/>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Display-only contact channels. Literal strings, no protocol.
#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <h4 class="text-2xl font-semibold text-gray-900 mb-6">"連絡先情報"</h4>

            <div class="bg-white p-6 rounded-xl shadow-sm">
                <div class="flex items-start space-x-4">
                    <div class="w-12 h-12 bg-blue-100 rounded-lg flex items-center justify-center flex-shrink-0">
                        <MailIcon class="w-6 h-6 text-blue-600"/>
                    </div>
                    <div>
                        <h5 class="font-semibold text-gray-900 mb-1">"サポートメール"</h5>
                        <p class="text-gray-600">"kotaro17206@icloud.com"</p>
                        <p class="text-sm text-gray-500 mt-1">"24時間以内にご返信いたします"</p>
                    </div>
                </div>
            </div>

            <div class="bg-white p-6 rounded-xl shadow-sm">
                <div class="flex items-start space-x-4">
                    <div class="w-12 h-12 bg-green-100 rounded-lg flex items-center justify-center flex-shrink-0">
                        <PhoneIcon class="w-6 h-6 text-green-600"/>
                    </div>
                    <div>
                        <h5 class="font-semibold text-gray-900 mb-1">"電話サポート"</h5>
                        <p class="text-gray-600">"080-4175-5965"</p>
                        <p class="text-sm text-gray-500 mt-1">"平日 9:00-18:00（土日祝除く）"</p>
                    </div>
                </div>
            </div>

            <div class="bg-white p-6 rounded-xl shadow-sm">
                <div class="flex items-start space-x-4">
                    <div class="w-12 h-12 bg-sky-100 rounded-lg flex items-center justify-center flex-shrink-0">
                        <TwitterIcon class="w-6 h-6 text-sky-600"/>
                    </div>
                    <div>
                        <h5 class="font-semibold text-gray-900 mb-1">"Twitter"</h5>
                        <a
                            href="https://twitter.com/neatify_app"
                            class="text-sky-600 hover:text-sky-700 transition-colors"
                        >
                            "@neatify_app"
                        </a>
                        <p class="text-sm text-gray-500 mt-1">"最新情報をお届けします"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[island]
pub fn InquiryForm() -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let (submitted, set_submitted) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        // The drained record is what a mail backend would receive; delivery
        // is out of scope, so the local acknowledgment is the whole story.
        let _record = form.try_update(|f| f.take_message());
        set_submitted.set(true);
    };

    view! {
        <form class="space-y-6" on:submit=on_submit>
            <Show when=move || submitted.get() fallback=|| ()>
                <div
                    id="contact-ack"
                    role="status"
                    class="bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg"
                >
                    "お問い合わせありがとうございます。24時間以内にご返信いたします。"
                </div>
            </Show>
            <div>
                <label for="name" class="block text-sm font-medium text-gray-700 mb-2">
                    "お名前"
                </label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.set(ContactField::Name, event_target_value(&ev)))
                    required
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors"
                    placeholder="山田太郎"
                />
            </div>
            <div>
                <label for="email" class="block text-sm font-medium text-gray-700 mb-2">
                    "メールアドレス"
                </label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.set(ContactField::Email, event_target_value(&ev)))
                    required
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors"
                    placeholder="example@email.com"
                />
            </div>
            <div>
                <label for="subject" class="block text-sm font-medium text-gray-700 mb-2">
                    "件名"
                </label>
                <input
                    type="text"
                    id="subject"
                    name="subject"
                    prop:value=move || form.with(|f| f.subject.clone())
                    on:input=move |ev| form.update(|f| f.set(ContactField::Subject, event_target_value(&ev)))
                    required
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors"
                    placeholder="お問い合わせの件名"
                />
            </div>
            <div>
                <label for="message" class="block text-sm font-medium text-gray-700 mb-2">
                    "メッセージ"
                </label>
                <textarea
                    id="message"
                    name="message"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.set(ContactField::Message, event_target_value(&ev)))
                    required
                    rows="5"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition-colors resize-none"
                    placeholder="お問い合わせ内容をご記入ください"
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-blue-600 text-white py-3 px-6 rounded-lg hover:bg-blue-700 transition-colors font-medium flex items-center justify-center space-x-2"
            >
                <SendIcon class="w-5 h-5"/>
                <span>"送信する"</span>
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_updates_exactly_the_named_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "taro@example.com".to_string());
        assert_eq!(form.email, "taro@example.com");
        assert!(form.name.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.message.is_empty());

        form.set(ContactField::Name, "Taro Yamada".to_string());
        assert_eq!(form.name, "Taro Yamada");
        assert_eq!(form.email, "taro@example.com", "email must be untouched");
    }

    #[test]
    fn from_name_maps_the_four_inputs() {
        assert_eq!(ContactField::from_name("name"), Some(ContactField::Name));
        assert_eq!(ContactField::from_name("email"), Some(ContactField::Email));
        assert_eq!(
            ContactField::from_name("subject"),
            Some(ContactField::Subject)
        );
        assert_eq!(
            ContactField::from_name("message"),
            Some(ContactField::Message)
        );
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert_eq!(ContactField::from_name(""), None);
        assert_eq!(ContactField::from_name("phone"), None);
        assert_eq!(ContactField::from_name("Name"), None);
    }

    #[test]
    fn incomplete_forms_are_reported() {
        let mut form = ContactForm::default();
        assert!(!form.is_complete());
        form.set(ContactField::Name, "Taro Yamada".to_string());
        form.set(ContactField::Email, "taro@example.com".to_string());
        form.set(ContactField::Subject, "Question".to_string());
        assert!(!form.is_complete(), "message is still empty");
        form.set(ContactField::Message, "How does scoring work?".to_string());
        assert!(form.is_complete());
    }

    #[test]
    fn take_message_returns_the_record_and_clears_the_form() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Taro Yamada".to_string());
        form.set(ContactField::Email, "taro@example.com".to_string());
        form.set(ContactField::Subject, "Question".to_string());
        form.set(ContactField::Message, "How does scoring work?".to_string());

        let record = form.take_message();
        assert_eq!(record.name, "Taro Yamada");
        assert_eq!(record.email, "taro@example.com");
        assert_eq!(record.subject, "Question");
        assert_eq!(record.message, "How does scoring work?");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn second_submission_does_not_carry_over() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Taro Yamada".to_string());
        form.set(ContactField::Email, "taro@example.com".to_string());
        form.set(ContactField::Subject, "Question".to_string());
        form.set(ContactField::Message, "How does scoring work?".to_string());
        let _first = form.take_message();

        let second = form.take_message();
        assert!(second.name.is_empty());
        assert!(second.email.is_empty());
        assert!(second.subject.is_empty());
        assert!(second.message.is_empty());
    }
}
