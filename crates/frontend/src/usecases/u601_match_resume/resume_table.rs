//! Resume Match - parsed resume fields table

use super::format::field_label;
use contracts::usecases::u601_match_resume::ResumeData;
use leptos::prelude::*;
use thaw::*;

/// One row per resume field, in the order the service sent them
#[component]
#[allow(non_snake_case)]
pub fn ResumeTable(data: ResumeData) -> impl IntoView {
    let rows = data
        .iter()
        .map(|(key, value)| {
            let label = field_label(key);
            let text = value.display();
            view! {
                <TableRow>
                    <TableCell>
                        <TableCellLayout>
                            <strong class="resume-table__label">{label}</strong>
                        </TableCellLayout>
                    </TableCell>
                    <TableCell>
                        <TableCellLayout>{text}</TableCellLayout>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <Table class="resume-table">
            <TableBody>{rows}</TableBody>
        </Table>
    }
}
