//! Segmented four-box input for one-time codes. The parent owns the digit
//! state and the editing rules; this component renders the boxes and moves
//! browser focus wherever the parent says the next keystroke belongs.

use leptos::html::Input;
use leptos::prelude::*;

const BOX_CLASS: &str = "w-16 h-16 text-center text-2xl font-black rounded-2xl outline-none transition-all border-2 bg-gray-50 border-transparent focus:border-blue-500 focus:bg-white";
const BOX_CLASS_INVALID: &str = "w-16 h-16 text-center text-2xl font-black rounded-2xl outline-none transition-all border-2 bg-red-50 border-red-200 text-red-600";

#[component]
pub fn OtpInput(
    /// Current digit per box.
    #[prop(into)]
    digits: Signal<[Option<char>; 4]>,
    /// Applies raw input at a box; returns the box to focus next.
    on_input: Callback<(usize, String), Option<usize>>,
    /// Backspace pressed on a box; returns the box to focus.
    on_backspace: Callback<usize, Option<usize>>,
    /// Paints the boxes in the error state after a rejected code.
    #[prop(optional, into, default = Signal::from(false))]
    invalid: Signal<bool>,
) -> impl IntoView {
    let refs: [NodeRef<Input>; 4] = [
        NodeRef::new(),
        NodeRef::new(),
        NodeRef::new(),
        NodeRef::new(),
    ];

    let focus = move |target: Option<usize>| {
        let Some(index) = target else {
            return;
        };
        if let Some(input) = refs.get(index).copied().and_then(|r| r.get()) {
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex justify-between gap-3">
            {refs
                .into_iter()
                .enumerate()
                .map(|(index, node_ref)| {
                    view! {
                        <input
                            type="text"
                            maxlength="1"
                            inputmode="numeric"
                            autocomplete="one-time-code"
                            aria-label=format!("Code digit {}", index + 1)
                            node_ref=node_ref
                            prop:value=move || {
                                digits.with(|d| d[index].map(String::from).unwrap_or_default())
                            }
                            class=move || if invalid.get() { BOX_CLASS_INVALID } else { BOX_CLASS }
                            on:input=move |event| {
                                let next = on_input.run((index, event_target_value(&event)));
                                focus(next);
                            }
                            on:keydown=move |event| {
                                if event.key() == "Backspace" {
                                    focus(on_backspace.run(index));
                                }
                            }
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
