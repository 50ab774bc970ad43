use brainstorm_application::{AdminIntent, Intent};
use brainstorm_core::inquiry::{InquiryFilter, InquiryId};
use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// List inquiries with statistics
    List {
        /// all, pending, answered or closed
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        status: InquiryFilter,
    },
    /// Show one inquiry
    Show { id: InquiryId },
    /// Answer an inquiry
    Reply {
        id: InquiryId,
        #[arg(long)]
        message: String,
    },
}

impl Default for AdminAction {
    fn default() -> Self {
        AdminAction::List {
            status: InquiryFilter::All,
        }
    }
}

fn parse_filter(value: &str) -> Result<InquiryFilter, String> {
    value.parse().map_err(|e: brainstorm_core::BrainstormError| e.to_string())
}

impl From<AdminAction> for Intent {
    fn from(action: AdminAction) -> Self {
        Intent::Admin(match action {
            AdminAction::List {
                status: InquiryFilter::All,
            } => AdminIntent::Reload,
            AdminAction::List { status } => AdminIntent::Filter(status),
            AdminAction::Show { id } => AdminIntent::Show(id),
            AdminAction::Reply { id, message } => AdminIntent::Reply { id, reply: message },
        })
    }
}

pub async fn run(app: &App, action: AdminAction) {
    super::dispatch(app, action.into()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use brainstorm_core::inquiry::InquiryStatus;

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!(parse_filter("ALL").unwrap(), InquiryFilter::All);
        assert_eq!(
            parse_filter("pending").unwrap(),
            InquiryFilter::Status(InquiryStatus::Pending)
        );
        assert!(parse_filter("spam").is_err());
    }

    #[test]
    fn test_filtered_list_becomes_filter_intent() {
        let action = AdminAction::List {
            status: InquiryFilter::Status(InquiryStatus::Closed),
        };
        assert_eq!(
            Intent::from(action),
            Intent::Admin(AdminIntent::Filter(InquiryFilter::Status(InquiryStatus::Closed)))
        );
    }
}
