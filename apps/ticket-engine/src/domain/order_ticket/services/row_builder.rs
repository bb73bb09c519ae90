//! Preview row builder.
//!
//! Pure derivation of the renderable row sequence from a preview result and,
//! after placement, the placement result. No side effects, no I/O.

use crate::domain::order_ticket::value_objects::{
    Acknowledgement, OrderPreviewResult, PlaceOrderResult, PreviewRow,
};
use crate::domain::shared::MarketFormatter;

/// Build the ordered row sequence for an order preview.
///
/// Row order is fixed: account identity, order number (post-placement only),
/// action, symbol, quantity, price, time in force, broker fee and estimated
/// cost when the broker reports them, then all warnings, then all
/// acknowledgements in upstream order. The acknowledgement slice supplies
/// current acceptance state so rebuilt row sets preserve it.
#[must_use]
pub fn build_preview_rows(
    account_label: &str,
    base_currency: &str,
    preview: &OrderPreviewResult,
    placement: Option<&PlaceOrderResult>,
    acknowledgements: &[Acknowledgement],
    formatter: &dyn MarketFormatter,
) -> Vec<PreviewRow> {
    let details = &preview.details;
    let mut rows = Vec::with_capacity(
        9 + preview.warnings.len() + acknowledgements.len(),
    );

    rows.push(PreviewRow::value("Account", account_label));

    if let Some(placement) = placement {
        rows.push(PreviewRow::value(
            "Order #",
            placement.order_number.as_str(),
        ));
    }

    rows.push(PreviewRow::value("Action", details.action.label()));
    rows.push(PreviewRow::value("Symbol", details.symbol.as_str()));
    rows.push(PreviewRow::value(
        "Shares",
        formatter.format_quantity(details.quantity),
    ));
    rows.push(PreviewRow::value("Price", details.price.clone()));
    rows.push(PreviewRow::value(
        "Time in force",
        details.expiration.label(),
    ));

    if let Some(commission) = details.commission {
        rows.push(PreviewRow::value(
            "Broker fee",
            formatter.format_currency(commission, base_currency),
        ));
    }

    if let Some(total) = details.estimated_total {
        rows.push(PreviewRow::value(
            "Estimated cost",
            formatter.format_currency(total, base_currency),
        ));
    }

    rows.extend(preview.warnings.iter().map(PreviewRow::warning));
    rows.extend(
        acknowledgements
            .iter()
            .cloned()
            .map(PreviewRow::Acknowledgement),
    );

    rows
}
