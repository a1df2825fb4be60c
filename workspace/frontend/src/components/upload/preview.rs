use compute::ParsedTable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub file_name: String,
    pub table: ParsedTable,
}

/// Scrollable preview of a parsed CSV with a pinned header row.
#[function_component(TablePreview)]
pub fn table_preview(props: &Props) -> Html {
    let table = &props.table;

    html! {
        <div class="mt-6">
            <div class="flex items-center justify-between mb-2">
                <span class="font-semibold">
                    <i class="fas fa-table mr-2"></i>
                    {&props.file_name}
                </span>
                <span class="text-sm text-gray-500">
                    {format!("Number of entries: {}", table.row_count())}
                </span>
            </div>
            <div class="overflow-auto max-h-96 border border-base-300 rounded-lg">
                <table class="table table-sm table-pin-rows">
                    <thead>
                        <tr>
                            {for table.headers.iter().map(|header| html! { <th>{header}</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {for table.rows.iter().map(|row| html! {
                            <tr>
                                {for row.iter().map(|cell| html! { <td>{cell}</td> })}
                            </tr>
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
