use leptos::prelude::*;

use crate::model::table::{DisplayValue, SeqEntry, TableRow};

/// Two-column table over flattened record rows, nesting sub-tables for
/// sequence values.
#[component]
pub fn RecordTable(rows: Vec<TableRow>) -> impl IntoView {
	view! {
		<table class="record-table">
			<tbody>{rows_view(rows)}</tbody>
		</table>
	}
}

fn rows_view(rows: Vec<TableRow>) -> AnyView {
	rows.into_iter()
		.map(|row| {
			view! {
				<tr>
					<td class="record-key">
						<strong>{row.key}</strong>
					</td>
					<td>{value_view(row.value)}</td>
				</tr>
			}
		})
		.collect_view()
		.into_any()
}

fn value_view(value: DisplayValue) -> AnyView {
	match value {
		DisplayValue::Text(text) => view! { <span>{text}</span> }.into_any(),
		DisplayValue::Seq(entries) => view! {
			<table class="record-table nested">
				<tbody>
					{entries
						.into_iter()
						.map(|entry| match entry {
							SeqEntry::Rows(rows) => view! {
								<tr>
									<td colspan="2">
										<table class="record-table nested">
											<tbody>{rows_view(rows)}</tbody>
										</table>
									</td>
								</tr>
							}
								.into_any(),
							SeqEntry::Item { index, text } => view! {
								<tr>
									<td class="record-key">{index.to_string()}</td>
									<td>{text}</td>
								</tr>
							}
								.into_any(),
						})
						.collect_view()}
				</tbody>
			</table>
		}
		.into_any(),
	}
}
