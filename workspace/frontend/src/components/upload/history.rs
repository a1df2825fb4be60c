use common::UploadDto;
use yew::prelude::*;

use crate::api_client::uploads::get_uploads;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRenderList;

fn format_size(bytes: i64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// List of previously analyzed uploads, newest first.
#[function_component(UploadHistory)]
pub fn upload_history() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(get_uploads);

    let on_retry = {
        let refetch = refetch.clone();
        Callback::from(move |_| refetch.emit(()))
    };

    let render_item = Callback::from(|upload: UploadDto| {
        html! {
            <div class="flex items-center justify-between border border-base-300 rounded-lg p-4">
                <div>
                    <span class="font-semibold">
                        <i class="fas fa-file-csv mr-2 text-primary"></i>
                        {&upload.original_name}
                    </span>
                    <p class="text-sm text-gray-500">
                        {format!(
                            "{} rows x {} columns, {}",
                            upload.row_count,
                            upload.column_count,
                            format_size(upload.size_bytes)
                        )}
                    </p>
                </div>
                <div class="text-right text-sm text-gray-500">
                    <div>{format!("#{}", upload.id)}</div>
                    <div>{upload.uploaded_at.format("%Y-%m-%d %H:%M").to_string()}</div>
                </div>
            </div>
        }
    });

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Previous Uploads"}</h3>
                <FetchRenderList<UploadDto>
                    state={(*fetch_state).clone()}
                    render_item={render_item}
                    on_retry={Some(on_retry)}
                    empty_message={Some("No uploads yet. Analyzed files will show up here.".to_string())}
                />
            </div>
        </div>
    }
}
