use super::*;

fn attached(state: &mut AttachmentState, preview: &str, uri: &str) {
    state.push_thumb(preview.to_owned(), format!("{preview}.png"));
    state.confirm_upload(uri.to_owned());
}

// =============================================================
// Screening
// =============================================================

#[test]
fn accepts_a_small_image() {
    let state = AttachmentState::default();
    assert_eq!(state.screen_file("image/png", 1024.0), Ok(()));
}

#[test]
fn rejects_non_image_types() {
    let state = AttachmentState::default();
    assert_eq!(
        state.screen_file("application/pdf", 1024.0),
        Err(FileRejection::NotAnImage)
    );
}

#[test]
fn rejects_files_over_six_mib() {
    let state = AttachmentState::default();
    let seven_mib = 7.0 * 1024.0 * 1024.0;
    assert_eq!(state.screen_file("image/jpeg", seven_mib), Err(FileRejection::TooLarge));
}

#[test]
fn accepts_exactly_six_mib() {
    let state = AttachmentState::default();
    assert_eq!(state.screen_file("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
}

#[test]
fn limit_takes_precedence_over_other_checks() {
    let mut state = AttachmentState::default();
    attached(&mut state, "a", "file:///a");
    attached(&mut state, "b", "file:///b");
    // Even a file that would also fail the type check reports the limit,
    // because the limit stops the whole selection batch.
    assert_eq!(
        state.screen_file("application/pdf", 1024.0),
        Err(FileRejection::LimitReached)
    );
}

#[test]
fn selecting_three_images_attaches_exactly_two() {
    let mut state = AttachmentState::default();
    let mut limit_hits = 0;
    for i in 0..3 {
        match state.screen_file("image/png", 1024.0) {
            Ok(()) => attached(&mut state, &format!("thumb-{i}"), &format!("file:///{i}")),
            Err(FileRejection::LimitReached) => {
                limit_hits += 1;
                break;
            }
            Err(other) => panic!("unexpected rejection: {other:?}"),
        }
    }
    assert_eq!(state.thumbs.len(), 2);
    assert_eq!(state.uploaded_uris, ["file:///0", "file:///1"]);
    assert_eq!(limit_hits, 1);
}

#[test]
fn rejection_messages() {
    assert_eq!(FileRejection::LimitReached.message(), "Max 2 images");
    assert_eq!(FileRejection::NotAnImage.message(), "Only images allowed");
    assert_eq!(FileRejection::TooLarge.message(), "Image too large (>6MB)");
}

// =============================================================
// Sequence alignment
// =============================================================

#[test]
fn thumb_leads_uri_while_upload_is_in_flight() {
    let mut state = AttachmentState::default();
    state.push_thumb("blob:a".to_owned(), "a.png".to_owned());
    assert_eq!(state.thumbs.len(), 1);
    assert!(state.uploaded_uris.is_empty());
    state.confirm_upload("file:///a".to_owned());
    assert_eq!(state.thumbs.len(), state.uploaded_uris.len());
}

#[test]
fn failed_upload_rollback_leaves_no_trace() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    state.push_thumb("blob:b".to_owned(), "b.png".to_owned());

    let evicted = state.remove_by_preview("blob:b").expect("thumb present");
    assert_eq!(evicted.preview_url, "blob:b");
    assert_eq!(state.thumbs.len(), 1);
    assert_eq!(state.uploaded_uris.len(), 1);
    assert_eq!(state.thumbs.len(), state.uploaded_uris.len());
}

#[test]
fn remove_at_splices_both_sequences() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    attached(&mut state, "blob:b", "file:///b");

    let evicted = state.remove_at(0).expect("index in range");
    assert_eq!(evicted.preview_url, "blob:a");
    assert_eq!(state.thumbs[0].preview_url, "blob:b");
    assert_eq!(state.uploaded_uris, ["file:///b"]);
}

#[test]
fn remove_at_out_of_range_is_a_noop() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    assert_eq!(state.remove_at(5), None);
    assert_eq!(state.thumbs.len(), 1);
}

#[test]
fn remove_at_tolerates_a_shorter_uri_sequence() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    // Second upload still in flight: thumb present, no uri yet.
    state.push_thumb("blob:b".to_owned(), "b.png".to_owned());

    let evicted = state.remove_at(1).expect("index in range");
    assert_eq!(evicted.preview_url, "blob:b");
    assert_eq!(state.uploaded_uris, ["file:///a"]);
}

#[test]
fn remove_by_preview_unknown_url_is_a_noop() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    assert_eq!(state.remove_by_preview("blob:unknown"), None);
    assert_eq!(state.thumbs.len(), 1);
}

#[test]
fn clear_empties_both_sequences_and_returns_thumbs() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    attached(&mut state, "blob:b", "file:///b");

    let evicted = state.clear();
    assert_eq!(evicted.len(), 2);
    assert!(state.thumbs.is_empty());
    assert!(state.uploaded_uris.is_empty());
}

// =============================================================
// Derived form state
// =============================================================

#[test]
fn uris_json_round_trips() {
    let mut state = AttachmentState::default();
    attached(&mut state, "blob:a", "file:///a");
    attached(&mut state, "blob:b", "gs://bucket/b");

    let decoded: Vec<String> = serde_json::from_str(&state.uris_json()).expect("valid json");
    assert_eq!(decoded, state.uploaded_uris);
}

#[test]
fn uris_json_is_empty_array_by_default() {
    assert_eq!(AttachmentState::default().uris_json(), "[]");
}

#[test]
fn file_label_joins_names() {
    let mut state = AttachmentState::default();
    state.push_thumb("blob:a".to_owned(), "leaf.png".to_owned());
    state.push_thumb("blob:b".to_owned(), "soil.jpg".to_owned());
    assert_eq!(state.file_label(), "leaf.png, soil.jpg");
}

#[test]
fn file_label_is_empty_with_no_attachments() {
    assert_eq!(AttachmentState::default().file_label(), "");
}
