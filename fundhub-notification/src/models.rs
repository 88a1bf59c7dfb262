use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::{funds, notifications};

/// What happened, and who (if anyone) must be addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// An applicant's application was approved. Addressed to the applicant.
    ApprovedApplication { target_user_id: String },
    /// An applicant's application was rejected. Addressed to the applicant.
    RejectedApplication { target_user_id: String },
    /// Someone applied to a fund. The recipient is resolved from the fund when absent.
    NewApplicant { target_user_id: Option<String> },
}

impl NotificationKind {
    pub const APPROVED_APPLICATION: &'static str = "approved application";
    pub const REJECTED_APPLICATION: &'static str = "rejected application";
    pub const NEW_APPLICANT: &'static str = "new applicant";

    /// The value stored in the `type` column.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ApprovedApplication { .. } => Self::APPROVED_APPLICATION,
            Self::RejectedApplication { .. } => Self::REJECTED_APPLICATION,
            Self::NewApplicant { .. } => Self::NEW_APPLICANT,
        }
    }

    pub fn target_user_id(&self) -> Option<&str> {
        match self {
            Self::ApprovedApplication { target_user_id }
            | Self::RejectedApplication { target_user_id } => Some(target_user_id),
            Self::NewApplicant { target_user_id } => target_user_id.as_deref(),
        }
    }
}

/// A validated notification waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub kind: NotificationKind,
    pub fund_id: u64,
}

impl NewNotification {
    pub fn as_row(&self) -> NewNotificationRow<'_> {
        NewNotificationRow {
            target_user_id: self.kind.target_user_id(),
            notification_type: self.kind.type_name(),
            fund_id: self.fund_id,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = notifications)]
pub struct NewNotificationRow<'a> {
    pub target_user_id: Option<&'a str>,
    pub notification_type: &'a str,
    pub fund_id: u64,
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Notification {
    pub id: u64,
    pub target_user_id: Option<String>,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub fund_id: u64,
    pub created_at: NaiveDateTime,
}

/// 201 body for `POST /notify`.
#[derive(Debug, Serialize)]
pub struct NotificationCreated {
    pub message: &'static str,
    #[serde(rename = "notificationId")]
    pub notification_id: u64,
}

impl NotificationCreated {
    pub const MESSAGE: &'static str = "Notification created successfully";

    pub fn new(notification_id: u64) -> Self {
        Self {
            message: Self::MESSAGE,
            notification_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = funds)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Fund {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub deadline: NaiveDate,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// A fund as the funding page renders it, with the viewer's application state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingOpportunity {
    #[serde(flatten)]
    pub fund: Fund,
    pub application_status: Option<ApplicationStatus>,
}

impl FundingOpportunity {
    pub fn without_application(fund: Fund) -> Self {
        Self {
            fund,
            application_status: None,
        }
    }

    pub fn with_application(fund: Fund, status: Option<&str>) -> Self {
        let application_status = status.and_then(|raw| {
            let parsed = ApplicationStatus::from_db(raw);
            if parsed.is_none() {
                tracing::warn!(fund_id = fund.id, status = raw, "unrecognised application status");
            }
            parsed
        });
        Self {
            fund,
            application_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fund() -> Fund {
        Fund {
            id: 7,
            title: "Community Garden Grant".into(),
            description: "Seed money for shared gardens".into(),
            amount: 2500.0,
            deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
            image: None,
        }
    }

    #[test]
    fn row_carries_type_name_and_target() {
        let notification = NewNotification {
            kind: NotificationKind::ApprovedApplication {
                target_user_id: "123".into(),
            },
            fund_id: 1,
        };
        let row = notification.as_row();

        assert_eq!(row.notification_type, "approved application");
        assert_eq!(row.target_user_id, Some("123"));
        assert_eq!(row.fund_id, 1);
    }

    #[test]
    fn new_applicant_may_have_no_target() {
        let kind = NotificationKind::NewApplicant {
            target_user_id: None,
        };
        assert_eq!(kind.type_name(), "new applicant");
        assert_eq!(kind.target_user_id(), None);
    }

    #[test]
    fn created_body_uses_camel_case_id() {
        let body = serde_json::to_value(NotificationCreated::new(1)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Notification created successfully",
                "notificationId": 1
            })
        );
    }

    #[test]
    fn notification_serializes_type_field() {
        let notification = Notification {
            id: 3,
            target_user_id: Some("42".into()),
            notification_type: "rejected application".into(),
            fund_id: 9,
            created_at: NaiveDate::from_ymd_opt(2026, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        };
        let body = serde_json::to_value(&notification).unwrap();

        assert_eq!(body["type"], "rejected application");
        assert!(body.get("notification_type").is_none());
    }

    #[test]
    fn opportunity_flattens_fund_fields() {
        let body = serde_json::to_value(FundingOpportunity::with_application(
            fund(),
            Some("approved"),
        ))
        .unwrap();

        assert_eq!(body["id"], 7);
        assert_eq!(body["deadline"], "2026-12-01");
        assert_eq!(body["application_status"], "approved");
    }

    #[test]
    fn unknown_status_is_dropped() {
        let opportunity = FundingOpportunity::with_application(fund(), Some("withdrawn"));
        assert_eq!(opportunity.application_status, None);
    }
}
