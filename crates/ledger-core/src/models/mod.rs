//! Domain records exchanged with the bookkeeping API.
//!
//! Field names match the wire format. Aggregates such as balances, approval
//! quorum and milestone progress are computed by the server and only carried
//! here.

mod amount;
mod approval;
mod company;
mod milestone;
mod project;
mod salary;
mod summary;
mod transaction;
mod user;

pub use amount::Amount;
pub use approval::{Approval, ApprovalStatus, Approvals};
pub use company::{Company, CompanyUpdate, Director, NewCompany, NewDirector};
pub use milestone::{Milestone, MilestoneUpdate, NewMilestone};
pub use project::{NewProject, Project, ProjectStatus, ProjectUpdate};
pub use salary::{NewSalary, Salary};
pub use summary::{AdminDashboard, DirectorBalance, Summary, SummaryMilestone};
pub use transaction::{Account, NewTransaction, Transaction, TransactionType, TransactionUpdate};
pub use user::{AdminNewUser, AdminUserCreated, UserProfile, UserRole, UserUpdate};

/// Declares a wire enum with its upper-case string form, `Display` and a
/// case-insensitive `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::InvalidInputError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| $crate::error::InvalidInputError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use wire_enum;
