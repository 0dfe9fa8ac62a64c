//! Attachment strip: attach button, hidden file picker, and thumbnails.
//!
//! SYSTEM CONTEXT
//! ==============
//! Selected files are screened and uploaded strictly one at a time: a
//! file's upload fully resolves before the next file is considered. That
//! sequencing is what keeps the preview and uri sequences in
//! `AttachmentState` index-aligned without any locking. Previews are object
//! URLs, created optimistically before the upload and revoked on every
//! removal path.

use leptos::prelude::*;

use crate::state::attachments::AttachmentState;
#[cfg(feature = "hydrate")]
use crate::state::attachments::FileRejection;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

#[component]
pub fn AttachmentStrip() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let attachments = expect_context::<RwSignal<AttachmentState>>();

    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let on_attach = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_selection = move |_| {
        #[cfg(feature = "hydrate")]
        {
            handle_selection(file_input_ref, attachments, toasts, ui);
        }
    };

    let remove_thumb = move |index: usize| {
        let mut removed = None;
        attachments.update(|a| removed = a.remove_at(index));
        #[cfg(feature = "hydrate")]
        {
            if let Some(thumb) = removed {
                let _ = web_sys::Url::revoke_object_url(&thumb.preview_url);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = removed;
        }
    };

    view! {
        <div class="attachments">
            <button
                class="btn attachments__attach"
                on:click=on_attach
                disabled=move || ui.get().busy
            >
                "Attach"
            </button>
            <input
                class="attachments__input"
                type="file"
                accept="image/*"
                multiple
                node_ref=file_input_ref
                on:change=on_selection
            />
            <div class="attachments__thumbs">
                {move || {
                    attachments
                        .get()
                        .thumbs
                        .into_iter()
                        .enumerate()
                        .map(|(index, thumb)| {
                            view! {
                                <div class="attachments__thumb">
                                    <img class="thumb" src=thumb.preview_url alt=thumb.name/>
                                    <button
                                        class="btn btn--danger attachments__remove"
                                        on:click=move |_| remove_thumb(index)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="attachments__names">{move || attachments.get().file_label()}</span>
        </div>
    }
}

/// Drain the picker's selection through screening and sequential upload.
#[cfg(feature = "hydrate")]
fn handle_selection(
    file_input_ref: NodeRef<leptos::html::Input>,
    attachments: RwSignal<AttachmentState>,
    toasts: RwSignal<ToastState>,
    ui: RwSignal<UiState>,
) {
    use crate::components::toasts::notify;

    let Some(input) = file_input_ref.get_untracked() else {
        return;
    };
    let Some(files) = input.files() else {
        return;
    };
    if files.length() == 0 {
        return;
    }
    let chosen: Vec<web_sys::File> = (0..files.length()).filter_map(|i| files.item(i)).collect();

    leptos::task::spawn_local(async move {
        for file in chosen {
            // The limit is re-checked per file: reaching it stops the batch,
            // while a skipped file leaves room for the ones after it.
            match attachments.get_untracked().screen_file(&file.type_(), file.size()) {
                Err(rejection @ FileRejection::LimitReached) => {
                    notify(toasts, &rejection.message());
                    break;
                }
                Err(rejection) => {
                    notify(toasts, &rejection.message());
                    continue;
                }
                Ok(()) => {}
            }

            let Ok(preview_url) = web_sys::Url::create_object_url_with_blob(&file) else {
                continue;
            };
            attachments.update(|a| a.push_thumb(preview_url.clone(), file.name()));

            match crate::net::api::upload_image(&file).await {
                Ok(uri) => {
                    attachments.update(|a| a.confirm_upload(uri));
                    notify(toasts, "Image attached");
                }
                Err(err) => {
                    log::warn!("image upload failed: {err}");
                    notify(toasts, "Upload failed");
                    ui.update(|u| u.set_error(err.to_string()));
                    let mut removed = None;
                    attachments.update(|a| removed = a.remove_by_preview(&preview_url));
                    if let Some(thumb) = removed {
                        let _ = web_sys::Url::revoke_object_url(&thumb.preview_url);
                    }
                }
            }
        }

        // Reset the picker so the same file can be selected again.
        if let Some(input) = file_input_ref.get_untracked() {
            input.set_value("");
        }
    });
}
