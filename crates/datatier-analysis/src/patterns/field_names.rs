//! Field-name rules, most sensitive first.
//!
//! Rule order only breaks ties between rules of equal sensitivity, so more
//! specific rules sit above the generic ones they overlap (`customer_id`
//! above `id`, `ip_address` above `address`).

use datatier_core::config::{FieldNameRuleConfig, NameSuppressionConfig};
use datatier_core::types::{DataType, Sensitivity};

fn rule(
    name: &str,
    keywords: &[&str],
    data_type: DataType,
    sensitivity: Sensitivity,
    base_confidence: f64,
) -> FieldNameRuleConfig {
    FieldNameRuleConfig {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        data_type,
        sensitivity,
        base_confidence,
    }
}

/// Build the built-in field-name table.
pub fn build_rules() -> Vec<FieldNameRuleConfig> {
    use DataType::*;
    use Sensitivity::*;

    vec![
        // Top secret
        rule(
            "national_identifier",
            &[
                "ssn",
                "social_security",
                "social_security_number",
                "national_id",
                "passport",
                "passport_number",
            ],
            Pii,
            TopSecret,
            0.95,
        ),
        rule(
            "payment_card",
            &["credit_card", "card_number", "cc_number", "pan", "cvv", "cvc"],
            Financial,
            TopSecret,
            0.95,
        ),
        rule(
            "credential",
            &[
                "password", "passwd", "password_hash", "api_key", "apikey", "secret", "secret_key",
                "client_secret", "private_key", "access_token", "refresh_token", "auth_token",
            ],
            Credential,
            TopSecret,
            0.90,
        ),
        // Restricted
        rule(
            "bank_account",
            &["bank_account", "account_number", "acct", "iban", "routing_number", "swift"],
            Financial,
            Restricted,
            0.90,
        ),
        rule(
            "health",
            &[
                "diagnosis",
                "medical_record",
                "health_record",
                "prescription",
                "medication",
                "blood_type",
                "allergy",
            ],
            Health,
            Restricted,
            0.90,
        ),
        rule(
            "compensation",
            &["salary", "income", "compensation", "wage", "tax_id"],
            Financial,
            Restricted,
            0.85,
        ),
        // Confidential
        rule(
            "date_of_birth",
            &["dob", "date_of_birth", "birth_date", "birthdate", "birthday"],
            Pii,
            Confidential,
            0.90,
        ),
        rule("email", &["email", "email_address", "e_mail"], Pii, Confidential, 0.90),
        rule(
            "phone",
            &["phone", "phone_number", "mobile", "telephone", "tel", "cell", "fax"],
            Pii,
            Confidential,
            0.85,
        ),
        rule(
            "person_name",
            &[
                "first_name",
                "last_name",
                "full_name",
                "fname",
                "lname",
                "surname",
                "given_name",
                "maiden_name",
            ],
            Pii,
            Confidential,
            0.85,
        ),
        rule(
            "network_identifier",
            &["ip_address", "ip", "mac_address", "device_id"],
            Pii,
            Confidential,
            0.70,
        ),
        rule(
            "street_address",
            &["address", "street", "street_address", "home_address"],
            Pii,
            Confidential,
            0.75,
        ),
        rule(
            "financial_amount",
            &["balance", "amount", "account_balance", "payment", "transaction_amount"],
            Financial,
            Confidential,
            0.70,
        ),
        rule("name", &["name"], Pii, Confidential, 0.60),
        // Internal
        rule(
            "business_metric",
            &["revenue", "sales", "earnings", "profit", "margin", "kpi", "forecast"],
            BusinessMetric,
            Internal,
            0.75,
        ),
        rule(
            "employee_id",
            &["employee_id", "emp_id", "emp", "staff_id"],
            Identifier,
            Internal,
            0.80,
        ),
        rule(
            "customer_id",
            &["customer_id", "cust_id", "cust", "client_id", "account_id", "user_id"],
            Identifier,
            Internal,
            0.80,
        ),
        rule("id", &["id", "uuid", "guid"], Identifier, Internal, 0.60),
        // Public
        rule(
            "geographic",
            &[
                "zip",
                "zip_code",
                "zipcode",
                "postal",
                "postal_code",
                "postcode",
                "city",
                "country",
                "region",
            ],
            Geographic,
            Public,
            0.70,
        ),
    ]
}

/// Build the built-in false-positive suppressions. A name ending in one of
/// these tokens usually describes the sensitive value rather than holding it.
pub fn build_suppressions() -> Vec<NameSuppressionConfig> {
    fn suppression(suffixes: &[&str], factor: f64) -> NameSuppressionConfig {
        NameSuppressionConfig {
            suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
            factor,
        }
    }

    vec![
        suppression(&["type", "count", "format", "length", "size", "len"], 0.3),
        suppression(&["enabled", "required", "visible", "active", "flag"], 0.2),
        suppression(&["updated_at", "created_at", "deleted_at", "verified_at"], 0.5),
        suppression(&["expiry", "expires", "expired"], 0.4),
        suppression(&["config", "setting", "preference", "option"], 0.3),
        suppression(&["template", "placeholder", "example", "sample"], 0.2),
    ]
}
