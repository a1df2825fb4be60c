use compute::{ParsedTable, parse_csv};
use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

use super::history::UploadHistory;
use super::preview::TablePreview;
use crate::api_client::uploads::upload_csv;
use crate::common::loading::{Loading, LoadingSize};
use crate::common::toast::ToastContext;

/// A file counts as CSV when either the browser MIME type or the file
/// extension says so; browsers disagree on which one they fill in.
fn is_csv_file(name: &str, mime: &str) -> bool {
    mime == "text/csv" || name.to_lowercase().ends_with(".csv")
}

/// CSV upload page: pick or drop a file, preview the parsed table, then
/// submit it for analysis.
#[function_component(UploadCsv)]
pub fn upload_csv_page() -> Html {
    let toast_ctx = use_context::<ToastContext>().unwrap();
    // File name plus parsed table of the current selection.
    let selected = use_state(|| None::<(String, ParsedTable)>);
    let file_handle = use_state(|| None::<File>);
    let dragging = use_state(|| false);
    let reading = use_state(|| false);
    let uploading = use_state(|| false);
    let history_generation = use_state(|| 0u32);
    // Bumped on every new selection and on unmount so a slow file read
    // cannot clobber a newer one.
    let read_generation = use_mut_ref(|| 0u64);
    let input_ref = use_node_ref();

    {
        let read_generation = read_generation.clone();
        use_effect_with((), move |_| {
            move || {
                *read_generation.borrow_mut() += 1;
            }
        });
    }

    let accept_file = {
        let toast_ctx = toast_ctx.clone();
        let selected = selected.clone();
        let file_handle = file_handle.clone();
        let reading = reading.clone();
        let read_generation = read_generation.clone();

        Callback::from(move |file: File| {
            if !is_csv_file(&file.name(), &file.type_()) {
                log::warn!("Rejected non-CSV file: {}", file.name());
                toast_ctx.show_warning(format!(
                    "'{}' is not a CSV file. Please pick a .csv export.",
                    file.name()
                ));
                return;
            }

            *read_generation.borrow_mut() += 1;
            let this_read = *read_generation.borrow();
            reading.set(true);

            let toast_ctx = toast_ctx.clone();
            let selected = selected.clone();
            let file_handle = file_handle.clone();
            let reading = reading.clone();
            let read_generation = read_generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let read = wasm_bindgen_futures::JsFuture::from(file.text()).await;

                // A newer selection or unmount superseded this read.
                if *read_generation.borrow() != this_read {
                    log::debug!("Discarding stale read of '{}'", file.name());
                    return;
                }
                reading.set(false);

                let text = match read {
                    Ok(value) => value.as_string().unwrap_or_default(),
                    Err(_) => {
                        log::error!("Browser failed to read '{}'", file.name());
                        toast_ctx.show_error(format!("Could not read '{}'.", file.name()));
                        return;
                    }
                };

                match parse_csv(&text) {
                    Ok(table) => {
                        log::info!(
                            "Parsed '{}' into {} rows x {} columns",
                            file.name(),
                            table.row_count(),
                            table.column_count()
                        );
                        selected.set(Some((file.name(), table)));
                        file_handle.set(Some(file));
                    }
                    Err(e) => {
                        // Keep whatever was previewed before; a bad pick
                        // should not wipe a good one.
                        log::warn!("Failed to parse '{}': {}", file.name(), e);
                        toast_ctx.show_error(e.to_string());
                    }
                }
            });
        })
    };

    let on_file_change = {
        let accept_file = accept_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file.emit(file);
            }
            // Reset so picking the same file again still fires change.
            input.set_value("");
        })
    };

    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
        })
    };

    let on_drop = {
        let accept_file = accept_file.clone();
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                accept_file.emit(file);
            }
        })
    };

    let on_zone_click = {
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_clear = {
        let selected = selected.clone();
        let file_handle = file_handle.clone();
        Callback::from(move |_| {
            selected.set(None);
            file_handle.set(None);
        })
    };

    let on_analyze = {
        let toast_ctx = toast_ctx.clone();
        let selected = selected.clone();
        let file_handle = file_handle.clone();
        let uploading = uploading.clone();
        let history_generation = history_generation.clone();

        Callback::from(move |_| {
            if *uploading {
                return;
            }
            let Some(file) = (*file_handle).clone() else {
                log::debug!("Analyze clicked with no file selected");
                return;
            };

            uploading.set(true);

            let toast_ctx = toast_ctx.clone();
            let selected = selected.clone();
            let file_handle = file_handle.clone();
            let uploading = uploading.clone();
            let history_generation = history_generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match upload_csv(&file).await {
                    Ok(upload) => {
                        toast_ctx.show_success(format!(
                            "'{}' analyzed and stored as upload #{}.",
                            upload.original_name, upload.id
                        ));
                        selected.set(None);
                        file_handle.set(None);
                        history_generation.set(*history_generation + 1);
                    }
                    Err(e) => {
                        // Keep the preview so the user can retry.
                        toast_ctx.show_error(e);
                    }
                }
                uploading.set(false);
            });
        })
    };

    let zone_class = classes!(
        "border-2",
        "border-dashed",
        "rounded-lg",
        "p-10",
        "text-center",
        "cursor-pointer",
        "transition-colors",
        if *dragging {
            "border-primary bg-primary/10"
        } else {
            "border-base-300"
        }
    );

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Upload Sales Data"}</h3>
                    <p class="text-sm text-gray-500 mb-4">
                        {"Drop a CSV export of your sales history to preview it and feed it into the forecast."}
                    </p>

                    <div
                        class={zone_class}
                        ondragover={on_drag_over}
                        ondragleave={on_drag_leave}
                        ondrop={on_drop}
                        onclick={on_zone_click}
                    >
                        <i class="fas fa-file-csv text-5xl text-gray-400 mb-4"></i>
                        <p class="font-medium">{"Drag & drop your CSV here, or click to browse"}</p>
                        <p class="text-sm text-gray-500 mt-1">{"Only .csv files are accepted"}</p>
                        <input
                            ref={input_ref}
                            type="file"
                            accept=".csv,text/csv"
                            class="hidden"
                            onchange={on_file_change}
                        />
                    </div>

                    {if *reading {
                        html! { <Loading size={LoadingSize::Small} text={Some("Reading file...".to_string())} /> }
                    } else {
                        html! {}
                    }}

                    {if let Some((name, table)) = &*selected {
                        html! {
                            <>
                                <TablePreview file_name={name.clone()} table={table.clone()} />
                                <div class="card-actions justify-end mt-4">
                                    <button class="btn btn-ghost" onclick={on_clear}>
                                        {"Clear"}
                                    </button>
                                    <button class="btn btn-primary" disabled={*uploading} onclick={on_analyze}>
                                        {if *uploading {
                                            html! {
                                                <>
                                                    <span class="loading loading-spinner loading-sm"></span>
                                                    {" Analyzing..."}
                                                </>
                                            }
                                        } else {
                                            html! {
                                                <>
                                                    <i class="fas fa-chart-simple"></i>
                                                    {" Analyze"}
                                                </>
                                            }
                                        }}
                                    </button>
                                </div>
                            </>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>

            <UploadHistory key={*history_generation} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::is_csv_file;

    #[test]
    fn accepts_csv_by_mime_type() {
        assert!(is_csv_file("export", "text/csv"));
    }

    #[test]
    fn accepts_csv_by_extension_when_mime_missing() {
        assert!(is_csv_file("sales.csv", ""));
        assert!(is_csv_file("SALES.CSV", "application/octet-stream"));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!is_csv_file("report.xlsx", ""));
        assert!(!is_csv_file("notes.txt", "text/plain"));
        assert!(!is_csv_file("csv", ""));
    }
}
