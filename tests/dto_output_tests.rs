//! Tests for output DTOs
//!
//! Verifies domain-to-DTO conversion and the JSON shape consumed by the
//! rendering layer.

use delivery_checkout_sample::compound_types::Voucher;
use delivery_checkout_sample::dto::{OrderStatusProjectionDto, ShippingResolutionDto};
use delivery_checkout_sample::simple_types::{FeeAmount, OrderId};
use delivery_checkout_sample::workflow::{project_status, resolve_shipping};
use rstest::rstest;
use rust_decimal::Decimal;

// =============================================================================
// Test helper functions
// =============================================================================

fn fee(value: i64) -> FeeAmount {
    FeeAmount::create(Decimal::from(value)).unwrap()
}

fn freeship(voucher_id: &str, cap: Option<i64>) -> Voucher {
    Voucher::create(
        voucher_id,
        "SHIPCODE",
        "FREESHIP",
        cap.map(Decimal::from),
        None,
    )
    .unwrap()
}

// =============================================================================
// ShippingResolutionDto tests
// =============================================================================

mod shipping_resolution_dto_tests {
    use super::*;

    #[rstest]
    fn test_from_domain_copies_every_field() {
        let vouchers = vec![freeship("vch-001", Some(20000))];
        let resolution = resolve_shipping(fee(30000), &vouchers);
        let dto = ShippingResolutionDto::from_domain(&resolution);

        assert_eq!(dto.base_fee, Decimal::from(30000));
        assert_eq!(dto.final_fee, Decimal::from(10000));
        assert_eq!(dto.max_shipping_discount, Decimal::from(20000));
        assert_eq!(dto.min_order_for_discount, Decimal::ZERO);
        assert!(dto.has_freeship);
    }

    #[rstest]
    fn test_json_uses_string_amounts() {
        let resolution = resolve_shipping(fee(30000), &[]);
        let dto = ShippingResolutionDto::from_domain(&resolution);

        let json = serde_json::to_string(&dto).unwrap();

        assert!(json.contains(r#""base_fee":"30000""#));
        assert!(json.contains(r#""final_fee":"30000""#));
        assert!(json.contains(r#""max_shipping_discount":"0""#));
        assert!(json.contains(r#""has_freeship":false"#));
    }

    #[rstest]
    fn test_roundtrip() {
        let vouchers = vec![freeship("vch-001", None)];
        let resolution = resolve_shipping(fee(42000), &vouchers);
        let dto = ShippingResolutionDto::from_domain(&resolution);

        let json = serde_json::to_string(&dto).unwrap();
        let restored: ShippingResolutionDto = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, dto);
    }
}

// =============================================================================
// OrderStatusProjectionDto tests
// =============================================================================

mod order_status_projection_dto_tests {
    use super::*;

    #[rstest]
    fn test_from_domain_classifies_six_steps() {
        let projection = project_status("READY");
        let dto = OrderStatusProjectionDto::from_domain(None, "READY", &projection);

        assert_eq!(dto.active_index, 3);
        assert_eq!(dto.steps.len(), 6);

        let completed: Vec<&str> = dto
            .steps
            .iter()
            .filter(|step| step.is_completed)
            .map(|step| step.step.as_str())
            .collect();
        assert_eq!(completed, vec!["PENDING", "PLACED", "PREPARING"]);

        assert!(dto.steps[3].is_active);
        assert!(!dto.steps[4].is_active);
    }

    #[rstest]
    fn test_order_id_is_echoed_when_present() {
        let order_id = OrderId::create("OrderId", "ORD-2024-001").unwrap();
        let projection = project_status("DELIVERED");
        let dto = OrderStatusProjectionDto::from_domain(Some(&order_id), "DELIVERED", &projection);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""order_id":"ORD-2024-001""#));
    }

    #[rstest]
    fn test_missing_order_id_is_omitted_from_json() {
        let projection = project_status("DELIVERED");
        let dto = OrderStatusProjectionDto::from_domain(None, "DELIVERED", &projection);

        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("order_id"));
    }

    #[rstest]
    fn test_raw_status_is_echoed_verbatim() {
        let projection = project_status("mystery");
        let dto = OrderStatusProjectionDto::from_domain(None, "mystery", &projection);

        assert_eq!(dto.status, "mystery");
        assert_eq!(dto.active_index, 0);
    }

    #[rstest]
    fn test_roundtrip() {
        let projection = project_status("ARRIVED");
        let dto = OrderStatusProjectionDto::from_domain(None, "ARRIVED", &projection);

        let json = serde_json::to_string(&dto).unwrap();
        let restored: OrderStatusProjectionDto = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, dto);
    }
}
