//! Signup route: collect account details, then verify the emailed one-time
//! code. The captured details ride along on the verify call, which is what
//! actually creates the account; success lands on the sign-in page.

use crate::{
    app_lib::ApiClient,
    components::{Alert, AlertKind, AppShell, Button, OtpInput, Spinner},
    features::auth::{
        client,
        flow::{Field, FieldError, SignupCall, SignupFlow, SignupPhase},
        ticker::keep_cooldown_ticking,
        types::{RegistrationRequest, VerifyUserRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();
    let flow = RwSignal::new(SignupFlow::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_visible, set_password_visible) = signal(false);
    let (field_error, set_field_error) = signal::<Option<FieldError>>(None);
    let (banner, set_banner) = signal::<Option<String>>(None);

    keep_cooldown_ticking(flow);

    let register_action = Action::new_local(move |request: &RegistrationRequest| {
        let request = request.clone();
        async move { client::register_user(ApiClient::shared(), &request).await }
    });
    let verify_action = Action::new_local(move |request: &VerifyUserRequest| {
        let request = request.clone();
        async move { client::verify_user(ApiClient::shared(), &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    set_banner.set(None);
                    flow.update(|f| f.registered());
                }
                Err(err) => set_banner.set(Some(err.display_or("Sign up failed"))),
            }
        }
    });

    let navigate_after_verify = navigate.clone();
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => navigate_after_verify("/login", Default::default()),
                Err(err) => set_banner.set(Some(err.display_or("Invalid OTP code"))),
            }
        }
    });

    let dispatch = move |call: SignupCall| match call {
        SignupCall::Register {
            name,
            email,
            password,
        } => {
            register_action.dispatch(RegistrationRequest {
                name,
                email,
                password,
            });
        }
        SignupCall::VerifyAccount {
            name,
            email,
            password,
            otp,
        } => {
            verify_action.dispatch(VerifyUserRequest {
                name,
                email,
                password,
                otp,
            });
        }
    };

    let on_submit_details = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_error.set(None);
        set_banner.set(None);
        let outcome = flow.try_update(|f| {
            f.submit_details(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
        });
        match outcome {
            Some(Ok(call)) => dispatch(call),
            Some(Err(err)) => set_field_error.set(Some(err)),
            None => {}
        }
    };

    let on_verify = move |_| {
        if verify_action.pending().get_untracked() {
            return;
        }
        set_banner.set(None);
        if let Some(call) = flow.with_untracked(SignupFlow::submit_code) {
            dispatch(call);
        }
    };

    let on_resend = move |_| {
        set_banner.set(None);
        if let Some(call) = flow.try_update(|f| f.resend()).flatten() {
            dispatch(call);
        }
    };

    let on_change_details = move |_| {
        set_banner.set(None);
        flow.update(|f| f.change_details());
    };

    let phase = Memo::new(move |_| flow.with(|f| f.phase()));
    let cooldown = Memo::new(move |_| flow.with(|f| f.cooldown()));
    let flow_email = Signal::derive(move || flow.with(|f| f.email().to_string()));
    let digits = Signal::derive(move || flow.with(|f| f.otp().digits()));
    let code_invalid = Signal::derive(move || matches!(verify_action.value().get(), Some(Err(_))));
    let verify_disabled = Signal::derive(move || {
        verify_action.pending().get() || !flow.with(|f| f.code_complete())
    });
    let on_digit = Callback::new(move |(index, value): (usize, String)| {
        flow.try_update(|f| f.enter_digit(index, &value)).flatten()
    });
    let on_backspace =
        Callback::new(move |index: usize| flow.with_untracked(|f| f.backspace_focus(index)));

    let field_message = move |field: Field| {
        field_error
            .get()
            .filter(|err| err.field() == field)
            .map(|err| {
                view! { <p class="text-[10px] text-red-500 font-bold ml-1">{err.message()}</p> }
            })
    };

    view! {
        <AppShell>
            <div class="w-full flex items-center justify-center px-4 py-16 font-sans">
                <div class="w-full max-w-[440px]">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-black text-gray-900 tracking-tight">
                            {move || match phase.get() {
                                SignupPhase::Form => "Create Account",
                                SignupPhase::Otp => "Verify Email",
                            }}
                        </h2>
                        <p class="text-gray-500 mt-2 font-medium">
                            {move || match phase.get() {
                                SignupPhase::Form => view! {
                                    <span>
                                        "Already have an account? "
                                        <A
                                            href="/login"
                                            {..}
                                            class="text-blue-600 hover:underline font-bold"
                                        >
                                            "Sign In"
                                        </A>
                                    </span>
                                }
                                .into_any(),
                                SignupPhase::Otp => view! {
                                    <span>{format!("Sent to {}", flow_email.get())}</span>
                                }
                                .into_any(),
                            }}
                        </p>
                    </div>

                    <div class="bg-white p-8 lg:p-10 rounded-3xl shadow-[0_20px_50px_rgba(0,0,0,0.05)] border border-gray-100 min-h-[460px] flex flex-col justify-center">
                        {move || match phase.get() {
                            SignupPhase::Form => view! {
                                <form class="space-y-4" on:submit=on_submit_details>
                                    <div class="space-y-1">
                                        <label
                                            class="text-xs font-black uppercase tracking-wider text-gray-400 ml-1"
                                            for="name"
                                        >
                                            "Full Name"
                                        </label>
                                        <input
                                            id="name"
                                            type="text"
                                            class="w-full px-4 py-3.5 bg-gray-50 border-2 border-transparent rounded-xl transition-all outline-none text-sm focus:bg-white focus:border-blue-500"
                                            placeholder="John Doe"
                                            prop:value=name
                                            on:input=move |event| {
                                                set_name.set(event_target_value(&event));
                                            }
                                        />
                                        {move || field_message(Field::Name)}
                                    </div>

                                    <div class="space-y-1">
                                        <label
                                            class="text-xs font-black uppercase tracking-wider text-gray-400 ml-1"
                                            for="email"
                                        >
                                            "Email Address"
                                        </label>
                                        <input
                                            id="email"
                                            type="email"
                                            class="w-full px-4 py-3.5 bg-gray-50 border-2 border-transparent rounded-xl transition-all outline-none text-sm focus:bg-white focus:border-blue-500"
                                            placeholder="your@email.com"
                                            prop:value=email
                                            on:input=move |event| {
                                                set_email.set(event_target_value(&event));
                                            }
                                        />
                                        {move || field_message(Field::Email)}
                                    </div>

                                    <div class="space-y-1">
                                        <label
                                            class="text-xs font-black uppercase tracking-wider text-gray-400 ml-1"
                                            for="password"
                                        >
                                            "Password"
                                        </label>
                                        <div class="relative">
                                            <input
                                                id="password"
                                                type=move || {
                                                    if password_visible.get() { "text" } else { "password" }
                                                }
                                                class="w-full pl-4 pr-12 py-3.5 bg-gray-50 border-2 border-transparent rounded-xl transition-all outline-none text-sm focus:bg-white focus:border-blue-500"
                                                placeholder="••••••••"
                                                prop:value=password
                                                on:input=move |event| {
                                                    set_password.set(event_target_value(&event));
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400 hover:text-blue-600 transition-colors"
                                                on:click=move |_| {
                                                    set_password_visible.update(|visible| *visible = !*visible);
                                                }
                                            >
                                                <span class="material-symbols-outlined text-lg">
                                                    {move || {
                                                        if password_visible.get() {
                                                            "visibility_off"
                                                        } else {
                                                            "visibility"
                                                        }
                                                    }}
                                                </span>
                                            </button>
                                        </div>
                                        {move || field_message(Field::Password)}
                                    </div>

                                    <Button
                                        button_type="submit"
                                        disabled=register_action.pending()
                                    >
                                        {move || {
                                            if register_action.pending().get() {
                                                "Sending OTP..."
                                            } else {
                                                "Create Account"
                                            }
                                        }}
                                    </Button>
                                </form>
                            }
                            .into_any(),
                            SignupPhase::Otp => view! {
                                <div class="space-y-8">
                                    <div class="flex flex-col items-center">
                                        <div class="bg-blue-50 p-4 rounded-full text-blue-600 mb-2">
                                            <span class="material-symbols-outlined text-4xl">
                                                "verified_user"
                                            </span>
                                        </div>
                                        <h3 class="font-bold text-gray-900">"Security Check"</h3>
                                    </div>

                                    <OtpInput
                                        digits=digits
                                        on_input=on_digit
                                        on_backspace=on_backspace
                                        invalid=code_invalid
                                    />

                                    <div class="space-y-4">
                                        <Button
                                            disabled=verify_disabled
                                            on:click=on_verify
                                        >
                                            {move || {
                                                if verify_action.pending().get() {
                                                    "Verifying..."
                                                } else {
                                                    "Verify & Continue"
                                                }
                                            }}
                                        </Button>
                                        <div class="text-center space-y-2">
                                            {move || {
                                                let seconds = cooldown.get();
                                                if seconds > 0 {
                                                    view! {
                                                        <p class="text-sm text-gray-400 font-medium">
                                                            "Resend code in "
                                                            <span class="text-gray-900 font-bold">
                                                                {seconds} "s"
                                                            </span>
                                                        </p>
                                                    }
                                                    .into_any()
                                                } else {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="text-sm text-blue-600 font-bold hover:underline"
                                                            on:click=on_resend
                                                        >
                                                            "Resend Verification Code"
                                                        </button>
                                                    }
                                                    .into_any()
                                                }
                                            }}
                                            <button
                                                type="button"
                                                class="block w-full text-xs font-bold text-gray-400 uppercase tracking-widest"
                                                on:click=on_change_details
                                            >
                                                "Change Details"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any(),
                        }}

                        {move || {
                            banner
                                .get()
                                .map(|message| {
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    }
                                })
                        }}
                        {move || {
                            register_action
                                .pending()
                                .get()
                                .then_some(
                                    view! { <div class="mt-4 text-center"><Spinner /></div> },
                                )
                        }}
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
