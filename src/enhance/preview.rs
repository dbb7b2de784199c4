//! Image preview under file inputs.
//!
//! Selecting an image renders a thumbnail and the file name into a
//! container tied to the input; each new selection replaces the previous
//! preview. Non-image files and read failures produce nothing.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, File, FileReader, HtmlInputElement};

use crate::dom;

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Whether a file's declared media type is an image.
///
/// Matches the `image/` prefix exactly as declared; media types are
/// lowercase in practice.
#[must_use]
pub fn is_image(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// DOM id of the preview container for the input with `input_id`.
#[must_use]
pub fn container_id(input_id: &str) -> String {
    format!("preview-{input_id}")
}

/// Attach a change handler to every file input present at page-ready.
pub fn attach(doc: &Document) {
    for input in dom::select_all(doc, "input[type=\"file\"]") {
        let Ok(input) = input.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let target = input.clone();
        dom::listen(&input, "change", move |_| on_change(&target));
    }
}

/// Inputs are treated as single-file: only the first selection is read.
fn on_change(input: &HtmlInputElement) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    if !is_image(&file.type_()) {
        return;
    }
    read_into_preview(input, &file);
}

/// Read `file` as a data URL and render the thumbnail once the load
/// completes. No error callback is registered: a failed read leaves the
/// page as it was.
fn read_into_preview(input: &HtmlInputElement, file: &File) {
    let Ok(reader) = FileReader::new() else {
        return;
    };
    let input = input.clone();
    let name = file.name();
    let reader_in_onload = reader.clone();
    let onload = Closure::once_into_js(move || {
        if let Some(data_url) = reader_in_onload.result().ok().and_then(|v| v.as_string()) {
            render(&input, &data_url, &name);
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    if reader.read_as_data_url(file).is_err() {
        log::debug!("file preview: read did not start");
    }
}

fn render(input: &HtmlInputElement, data_url: &str, file_name: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(container) = find_or_create_container(&doc, input) else {
        return;
    };
    container.set_inner_html("");

    let Ok(img) = doc.create_element("img") else {
        return;
    };
    let _ = img.set_attribute("src", data_url);
    let _ = img.set_attribute("alt", "Preview");
    let _ = img.set_attribute("class", "img-thumbnail");
    let _ = img.set_attribute("style", "max-height: 200px;");
    let _ = container.append_child(&img);

    let Ok(caption) = doc.create_element("p") else {
        return;
    };
    let _ = caption.set_attribute("class", "small text-muted mt-1");
    caption.set_text_content(Some(&format!("Selected: {file_name}")));
    let _ = container.append_child(&caption);
}

/// The preview container for `input`, created under the input's parent on
/// first use and reused thereafter.
fn find_or_create_container(doc: &Document, input: &HtmlInputElement) -> Option<Element> {
    let id = container_id(&input.id());
    if let Some(existing) = doc.get_element_by_id(&id) {
        return Some(existing);
    }
    let container = doc.create_element("div").ok()?;
    container.set_id(&id);
    let _ = container.set_attribute("class", "mt-2");
    input.parent_node()?.append_child(&container).ok()?;
    Some(container)
}
