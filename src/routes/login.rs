//! Sign-in route. One remote call; the "remember me" checkbox is collected
//! as client-side state only and is not part of the login payload.

use crate::{
    app_lib::ApiClient,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::{
        client,
        flow::{Field, FieldError, validate_login},
        types::LoginRequest,
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_visible, set_password_visible) = signal(false);
    let (remember_me, set_remember_me) = signal(false);
    let (field_error, set_field_error) = signal::<Option<FieldError>>(None);
    let (banner, set_banner) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(ApiClient::shared(), &request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => navigate("/", Default::default()),
                Err(err) => set_banner.set(Some(err.display_or("Invalid Credentials!"))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_error.set(None);
        set_banner.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(err) = validate_login(&email_value, &password_value) {
            set_field_error.set(Some(err));
            return;
        }

        login_action.dispatch(LoginRequest {
            email: email_value.trim().to_string(),
            password: password_value,
        });
    };

    let field_message = move |field: Field| {
        field_error
            .get()
            .filter(|err| err.field() == field)
            .map(|err| {
                view! { <p class="mt-1 text-xs text-red-500 font-medium">{err.message()}</p> }
            })
    };

    view! {
        <AppShell>
            <div class="flex flex-col justify-center py-12 sm:px-6 lg:px-8 font-sans">
                <div class="sm:mx-auto sm:w-full sm:max-w-md">
                    <h2 class="text-center text-3xl font-extrabold text-gray-900">
                        "Welcome back"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Don't have an account? "
                        <A
                            href="/signup"
                            {..}
                            class="font-bold text-blue-600 hover:text-blue-500 transition-colors"
                        >
                            "Create one for free"
                        </A>
                    </p>
                </div>

                <div class="mt-8 sm:mx-auto sm:w-full sm:max-w-md">
                    <div class="bg-white py-8 px-4 shadow-[0_8px_30px_rgb(0,0,0,0.04)] border border-gray-100 sm:rounded-2xl sm:px-10">
                        <form class="space-y-5" on:submit=on_submit>
                            <div>
                                <label
                                    class="block text-sm font-bold text-gray-700 mb-1"
                                    for="email"
                                >
                                    "Email Address"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    class="block w-full px-3 py-3 border border-gray-200 bg-gray-50 rounded-xl focus:outline-none focus:ring-2 focus:ring-blue-500/20 focus:border-blue-500 transition-all text-sm"
                                    autocomplete="email"
                                    placeholder="name@company.com"
                                    prop:value=email
                                    on:input=move |event| set_email.set(event_target_value(&event))
                                />
                                {move || field_message(Field::Email)}
                            </div>

                            <div>
                                <div class="flex items-center justify-between mb-1">
                                    <label
                                        class="block text-sm font-bold text-gray-700"
                                        for="password"
                                    >
                                        "Password"
                                    </label>
                                    <A
                                        href="/forgot-password"
                                        {..}
                                        class="text-xs font-bold text-blue-600 hover:text-blue-500"
                                    >
                                        "Forgot password?"
                                    </A>
                                </div>
                                <div class="relative">
                                    <input
                                        id="password"
                                        type=move || {
                                            if password_visible.get() { "text" } else { "password" }
                                        }
                                        class="block w-full pl-3 pr-12 py-3 border border-gray-200 bg-gray-50 rounded-xl focus:outline-none focus:ring-2 focus:ring-blue-500/20 focus:border-blue-500 transition-all text-sm"
                                        autocomplete="current-password"
                                        placeholder="••••••••"
                                        prop:value=password
                                        on:input=move |event| {
                                            set_password.set(event_target_value(&event));
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="absolute inset-y-0 right-0 pr-3 flex items-center text-gray-400 hover:text-gray-600"
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

                            <div class="flex items-center">
                                <input
                                    id="remember-me"
                                    type="checkbox"
                                    class="h-4 w-4 text-blue-600 focus:ring-blue-500 border-gray-300 rounded cursor-pointer"
                                    prop:checked=remember_me
                                    on:change=move |event| {
                                        set_remember_me.set(event_target_checked(&event));
                                    }
                                />
                                <label
                                    class="ml-2 block text-sm text-gray-600 font-medium cursor-pointer select-none"
                                    for="remember-me"
                                >
                                    "Remember me"
                                </label>
                            </div>

                            {move || {
                                banner
                                    .get()
                                    .map(|message| {
                                        view! { <Alert kind=AlertKind::Error message=message /> }
                                    })
                            }}

                            <Button button_type="submit" disabled=login_action.pending()>
                                {move || {
                                    if login_action.pending().get() { "Signing In..." } else { "Sign In" }
                                }}
                            </Button>
                            {move || {
                                login_action
                                    .pending()
                                    .get()
                                    .then_some(
                                        view! { <div class="text-center"><Spinner /></div> },
                                    )
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
