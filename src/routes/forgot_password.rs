//! Password recovery route driving the three-step flow: account email, then
//! the emailed one-time code, then the replacement password. The flow state
//! machine decides what may happen; this component wires it to the network
//! actions and the DOM.

use crate::{
    app_lib::ApiClient,
    components::{Alert, AlertKind, AppShell, Button, OtpInput, Spinner},
    features::auth::{
        client,
        flow::{Field, FieldError, RecoveryCall, RecoveryFlow, RecoveryPhase},
        ticker::keep_cooldown_ticking,
        types::{ForgotPasswordRequest, ResetPasswordRequest, VerifyForgotPasswordRequest},
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let flow = RwSignal::new(RecoveryFlow::new());
    let (email_input, set_email_input) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (password_visible, set_password_visible) = signal(false);
    let (field_error, set_field_error) = signal::<Option<FieldError>>(None);
    let (banner, set_banner) = signal::<Option<String>>(None);

    keep_cooldown_ticking(flow);

    let issue_action = Action::new_local(move |email: &String| {
        let request = ForgotPasswordRequest {
            email: email.clone(),
        };
        async move { client::forgot_password(ApiClient::shared(), &request).await }
    });
    let verify_action = Action::new_local(move |(email, otp): &(String, String)| {
        let request = VerifyForgotPasswordRequest {
            email: email.clone(),
            otp: otp.clone(),
        };
        async move { client::verify_forgot_password(ApiClient::shared(), &request).await }
    });
    let reset_action = Action::new_local(move |request: &ResetPasswordRequest| {
        let request = request.clone();
        async move { client::reset_password(ApiClient::shared(), &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = issue_action.value().get() {
            match result {
                Ok(()) => {
                    set_banner.set(None);
                    flow.update(|f| f.code_issued());
                }
                Err(err) => set_banner.set(Some(err.display_or("User not found"))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_banner.set(None);
                    flow.update(|f| f.code_verified());
                }
                Err(err) => set_banner.set(Some(err.display_or("Invalid OTP code"))),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => navigate("/login", Default::default()),
                Err(err) => set_banner.set(Some(err.display_or("Reset failed"))),
            }
        }
    });

    let dispatch = move |call: RecoveryCall| match call {
        RecoveryCall::IssueCode { email } => {
            issue_action.dispatch(email);
        }
        RecoveryCall::VerifyCode { email, otp } => {
            verify_action.dispatch((email, otp));
        }
        RecoveryCall::CommitPassword {
            email,
            otp,
            new_password,
        } => {
            reset_action.dispatch(ResetPasswordRequest {
                email,
                otp,
                new_password,
            });
        }
    };

    let on_submit_email = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_error.set(None);
        set_banner.set(None);
        let outcome = flow.try_update(|f| f.submit_email(&email_input.get_untracked()));
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
        if let Some(call) = flow.with_untracked(RecoveryFlow::submit_code) {
            dispatch(call);
        }
    };

    let on_resend = move |_| {
        set_banner.set(None);
        if let Some(call) = flow.try_update(|f| f.resend()).flatten() {
            dispatch(call);
        }
    };

    let on_change_email = move |_| {
        set_banner.set(None);
        flow.update(|f| f.change_email());
    };

    let on_submit_password = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_error.set(None);
        set_banner.set(None);
        let outcome = flow.with_untracked(|f| {
            f.submit_password(&password.get_untracked(), &confirm.get_untracked())
        });
        match outcome {
            Ok(call) => dispatch(call),
            Err(err) => set_field_error.set(Some(err)),
        }
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
            <div class="w-full flex items-center justify-center px-4 py-16 font-sans text-gray-900">
                <div class="w-full max-w-[440px]">
                    <div class="text-center mb-8">
                        <h2 class="text-3xl font-black tracking-tight">
                            {move || match phase.get() {
                                RecoveryPhase::Email => "Reset Password",
                                RecoveryPhase::Otp => "Verify Identity",
                                RecoveryPhase::Reset => "New Password",
                            }}
                        </h2>
                        <p class="text-gray-500 mt-2 font-medium">
                            {move || match phase.get() {
                                RecoveryPhase::Email => {
                                    "Enter your email to receive a recovery code".to_string()
                                }
                                RecoveryPhase::Otp => {
                                    format!("Enter the code sent to {}", flow_email.get())
                                }
                                RecoveryPhase::Reset => {
                                    "Please choose a strong new password".to_string()
                                }
                            }}
                        </p>
                    </div>

                    <div class="bg-white p-8 lg:p-10 rounded-3xl shadow-[0_20px_50px_rgba(0,0,0,0.05)] border border-gray-100 min-h-[440px] flex flex-col justify-center">
                        {move || match phase.get() {
                            RecoveryPhase::Email => view! {
                                <form class="space-y-6" on:submit=on_submit_email>
                                    <div class="space-y-1.5">
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
                                            prop:value=email_input
                                            on:input=move |event| {
                                                set_email_input.set(event_target_value(&event));
                                            }
                                        />
                                        {move || field_message(Field::Email)}
                                    </div>

                                    <div class="space-y-3">
                                        <Button
                                            button_type="submit"
                                            disabled=issue_action.pending()
                                        >
                                            {move || {
                                                if issue_action.pending().get() {
                                                    "Sending..."
                                                } else {
                                                    "Send Reset Code"
                                                }
                                            }}
                                        </Button>
                                        <A
                                            href="/login"
                                            {..}
                                            class="block text-center text-sm font-bold text-gray-400 hover:text-gray-600"
                                        >
                                            "Back to Login"
                                        </A>
                                    </div>
                                </form>
                            }
                            .into_any(),
                            RecoveryPhase::Otp => view! {
                                <div class="space-y-8">
                                    <div class="flex flex-col items-center">
                                        <div class="bg-blue-50 p-4 rounded-full text-blue-600 mb-2">
                                            <span class="material-symbols-outlined text-4xl">
                                                "verified_user"
                                            </span>
                                        </div>
                                        <h3 class="font-bold text-gray-900">"Enter Code"</h3>
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
                                                    "Verify Code"
                                                }
                                            }}
                                        </Button>
                                        <div class="text-center space-y-2">
                                            {move || {
                                                let seconds = cooldown.get();
                                                if seconds > 0 {
                                                    view! {
                                                        <p class="text-sm text-gray-400">
                                                            "Resend in "
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
                                                            "Resend Code"
                                                        </button>
                                                    }
                                                    .into_any()
                                                }
                                            }}
                                            <button
                                                type="button"
                                                class="block w-full text-xs font-bold text-gray-400 uppercase tracking-widest"
                                                on:click=on_change_email
                                            >
                                                "Change Email"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            RecoveryPhase::Reset => view! {
                                <form class="space-y-5" on:submit=on_submit_password>
                                    <div class="space-y-1.5">
                                        <label
                                            class="text-xs font-black uppercase tracking-wider text-gray-400 ml-1"
                                            for="password"
                                        >
                                            "New Password"
                                        </label>
                                        <div class="relative">
                                            <input
                                                id="password"
                                                type=move || {
                                                    if password_visible.get() { "text" } else { "password" }
                                                }
                                                class="w-full pl-4 pr-12 py-3.5 bg-gray-50 border-2 border-transparent rounded-xl outline-none text-sm transition-all focus:bg-white focus:border-blue-500"
                                                placeholder="••••••••"
                                                prop:value=password
                                                on:input=move |event| {
                                                    set_password.set(event_target_value(&event));
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="absolute right-4 top-1/2 -translate-y-1/2 text-gray-400"
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

                                    <div class="space-y-1.5">
                                        <label
                                            class="text-xs font-black uppercase tracking-wider text-gray-400 ml-1"
                                            for="confirm_password"
                                        >
                                            "Confirm Password"
                                        </label>
                                        <input
                                            id="confirm_password"
                                            type="password"
                                            class="w-full px-4 py-3.5 bg-gray-50 border-2 border-transparent rounded-xl outline-none text-sm transition-all focus:bg-white focus:border-blue-500"
                                            placeholder="••••••••"
                                            prop:value=confirm
                                            on:input=move |event| {
                                                set_confirm.set(event_target_value(&event));
                                            }
                                        />
                                        {move || field_message(Field::Confirm)}
                                    </div>

                                    <Button button_type="submit" disabled=reset_action.pending()>
                                        {move || {
                                            if reset_action.pending().get() {
                                                "Updating..."
                                            } else {
                                                "Update Password"
                                            }
                                        }}
                                    </Button>
                                    <A
                                        href="/login"
                                        {..}
                                        class="block text-center text-sm font-bold text-gray-400 hover:text-gray-600"
                                    >
                                        "Cancel & Return"
                                    </A>
                                </form>
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
                            (issue_action.pending().get() || reset_action.pending().get())
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
