use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Header section — wraps `DataTableColumn` cells in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        rsx! {
            DataTableHeader {
                DataTableColumn { "Type" }
                DataTableColumn { "Location" }
            }
            DataTableBody {
                DataTableRow {
                    DataTableCell { "Theft" }
                    DataTableCell { "Adajan" }
                }
            }
        }
    }

    #[test]
    fn rows_render_as_table_markup() {
        let mut dom = VirtualDom::new(sample);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<th>Type</th>"));
        assert!(html.contains("<td>Adajan</td>"));
        assert!(html.contains("data-table-row"));
    }
}
