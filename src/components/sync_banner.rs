//! Sync Banner Component
//!
//! Warns when the last write to `localStorage` failed. The list keeps
//! working from memory; the banner clears after the next successful write.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn SyncBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.sync_warning().map(|message| {
            view! {
                <div class="sync-banner" role="alert">
                    "Changes are not being saved: " {message}
                </div>
            }
        })
    }
}
