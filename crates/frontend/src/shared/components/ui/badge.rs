use contracts::domain::a003_sale::SaleStatus;
use contracts::domain::a004_invoice::InvoiceStatus;
use contracts::domain::a005_appointment::AppointmentStatus;
use contracts::domain::a007_service_order::ServiceOrderStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "outline", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        "outline" => "badge--outline",
        _ => "badge--neutral",
    }
}

/// Варианты бейджей для статусов документов
pub trait BadgeVariant {
    fn badge_variant(&self) -> &'static str;
}

impl BadgeVariant for SaleStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "success",
            SaleStatus::Cancelled => "error",
            SaleStatus::Pending => "warning",
        }
    }
}

impl BadgeVariant for InvoiceStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            InvoiceStatus::Pago => "success",
            InvoiceStatus::Aberto => "neutral",
        }
    }
}

impl BadgeVariant for AppointmentStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            AppointmentStatus::Compareceu => "success",
            AppointmentStatus::Faltou => "error",
            AppointmentStatus::Cancelado => "outline",
            AppointmentStatus::Aberto => "primary",
        }
    }
}

impl BadgeVariant for ServiceOrderStatus {
    fn badge_variant(&self) -> &'static str {
        match self {
            ServiceOrderStatus::Delivered => "success",
            ServiceOrderStatus::Cancelled => "error",
            ServiceOrderStatus::ReadyForPickup => "outline",
            _ => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_order_variants() {
        assert_eq!(ServiceOrderStatus::Delivered.badge_variant(), "success");
        assert_eq!(ServiceOrderStatus::Cancelled.badge_variant(), "error");
        assert_eq!(ServiceOrderStatus::ReadyForPickup.badge_variant(), "outline");
        assert_eq!(ServiceOrderStatus::InProduction.badge_variant(), "neutral");
        assert_eq!(badge_class(ServiceOrderStatus::Delivered.badge_variant()), "badge--success");
    }
}
