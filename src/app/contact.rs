use leptos::{either::Either, html, prelude::*};

use super::icon::Glyph;
use super::reveal::{use_reveal, Animated};
use crate::contact::{submit, ContactForm, ContactFormError, Field, LogRelay, Notice, SubmitError};
use crate::content::{portfolio, Icon, SectionId};
use crate::motion::{Motion, REVEAL_DISTANCE, STAGGER_STEP};

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-slate-800 border-slate-700 text-white placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    errors: RwSignal<Option<ContactFormError>>,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
    };
    let input_type = if field == Field::Email { "email" } else { "text" };
    let error = move || {
        errors.with(|e| {
            e.as_ref()
                .and_then(|e| e.for_field(field))
                .map(|e| e.to_string())
        })
    };

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium mb-2 text-white">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=field.id()
                            name=field.id()
                            rows="5"
                            placeholder=field.placeholder()
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=field.id()
                            name=field.id()
                            type=input_type
                            placeholder=field.placeholder()
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
            {move || {
                error().map(|msg| view! { <p class="mt-1 text-sm text-red-400">{msg}</p> })
            }}
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(None::<ContactFormError>);
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        let result = submit(&mut current, &LogRelay);
        set_notice.set(Notice::for_result(&result));
        match result {
            Ok(()) => {
                form.set(current);
                errors.set(None);
            }
            Err(SubmitError::Invalid(e)) => errors.set(Some(e)),
            Err(SubmitError::Relay(_)) => errors.set(None),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6" novalidate=true>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FormField field=Field::Name form errors />
                <FormField field=Field::Email form errors />
            </div>
            <FormField field=Field::Subject form errors />
            <FormField field=Field::Message form errors />
            <button
                type="submit"
                class="w-full flex items-center justify-center bg-blue-600 hover:bg-blue-700 text-white px-8 py-4 font-semibold rounded-md"
            >
                "Send Message"
                <Glyph icon=Icon::Send class="ml-2" />
            </button>
            {move || {
                notice
                    .get()
                    .map(|n| {
                        let color = if n.is_error() { "text-red-400" } else { "text-green-400" };
                        view! {
                            <p class=format!("text-center {color}") role="status">
                                {n.text().to_string()}
                            </p>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let p = portfolio();
    view! {
        <h3 class="text-2xl font-semibold mb-8 text-white">"Get In Touch"</h3>
        <div class="space-y-6">
            {p
                .contact_methods
                .iter()
                .map(|m| {
                    view! {
                        <div class="flex items-center gap-4">
                            <div class=format!(
                                "w-12 h-12 {} rounded-lg flex items-center justify-center",
                                m.accent,
                            )>
                                <Glyph icon=m.icon class="text-2xl text-white" />
                            </div>
                            <div>
                                <h4 class="font-semibold text-white">{m.label.as_str()}</h4>
                                <p class="text-slate-300">{m.value.as_str()}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="mt-8">
            <h4 class="font-semibold mb-4 text-white">"Follow Me"</h4>
            <div class="flex gap-4">
                {p
                    .social_links
                    .iter()
                    .map(|s| {
                        view! {
                            <a
                                href=s.href.as_str()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=s.icon.label()
                                class=format!(
                                    "w-10 h-10 bg-slate-800 {} rounded-lg flex items-center justify-center transition-all duration-300 hover:scale-110 active:scale-95",
                                    s.hover,
                                )
                            >
                                <Glyph icon=s.icon class="text-xl text-white" />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let copy = portfolio().section(SectionId::Contact);
    let section_ref = NodeRef::<html::Section>::new();
    let entered = use_reveal(section_ref);

    view! {
        <section id=SectionId::Contact.as_str() node_ref=section_ref class="py-20 bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Animated
                    motion=Motion::fade_up(REVEAL_DISTANCE)
                    trigger=entered
                    class="text-center mb-16"
                >
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 text-white">{copy.title}</h2>
                    <p class="text-lg text-slate-300 max-w-2xl mx-auto">{copy.subtitle}</p>
                </Animated>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Animated motion=Motion::slide_in(-REVEAL_DISTANCE) trigger=entered>
                        <ContactInfo />
                    </Animated>
                    <Animated
                        motion=Motion::slide_in(REVEAL_DISTANCE).delay(STAGGER_STEP)
                        trigger=entered
                    >
                        <ContactFormView />
                    </Animated>
                </div>
            </div>
        </section>
    }
}
