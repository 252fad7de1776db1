use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// unique identifier for a client aggregate
pub type ClientId = Uuid;

/// loan identifier, unique only within its owning client
pub type LoanId = Uuid;

/// legal ownership form of a borrowing entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipType {
    LimitedLiability,
    JointStock,
    StateOwned,
    SoleProprietor,
}

impl OwnershipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipType::LimitedLiability => "limited-liability",
            OwnershipType::JointStock => "joint-stock",
            OwnershipType::StateOwned => "state-owned",
            OwnershipType::SoleProprietor => "sole-proprietor",
        }
    }
}

impl fmt::Display for OwnershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limited-liability" => Ok(OwnershipType::LimitedLiability),
            "joint-stock" => Ok(OwnershipType::JointStock),
            "state-owned" => Ok(OwnershipType::StateOwned),
            "sole-proprietor" => Ok(OwnershipType::SoleProprietor),
            _ => Err(format!("unknown ownership type: {s}")),
        }
    }
}

/// business category of a loan product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanCategory {
    SmallBusiness,
    LongTerm,
    Equipment,
    StateProgram,
    Micro,
}

impl LoanCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanCategory::SmallBusiness => "small-business",
            LoanCategory::LongTerm => "long-term",
            LoanCategory::Equipment => "equipment",
            LoanCategory::StateProgram => "state-program",
            LoanCategory::Micro => "micro",
        }
    }
}

impl fmt::Display for LoanCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoanCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small-business" => Ok(LoanCategory::SmallBusiness),
            "long-term" => Ok(LoanCategory::LongTerm),
            "equipment" => Ok(LoanCategory::Equipment),
            "state-program" => Ok(LoanCategory::StateProgram),
            "micro" => Ok(LoanCategory::Micro),
            _ => Err(format!("unknown loan category: {s}")),
        }
    }
}

/// repayment contract of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentConditions {
    /// equal installment expected every month over the term
    MonthlyInstallment,
    /// entire balance due in one payment at term end
    SingleBalloonPayment,
}

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// balance outstanding
    Active,
    /// payable reached zero; never reverts automatically
    PaidOff,
}

/// reason a penalty was assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenaltyReason {
    PaidLate,
    InsufficientFunds,
}

impl fmt::Display for PenaltyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PenaltyReason::PaidLate => f.write_str("paid late"),
            PenaltyReason::InsufficientFunds => f.write_str("insufficient funds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_roundtrip() {
        for o in [
            OwnershipType::LimitedLiability,
            OwnershipType::JointStock,
            OwnershipType::StateOwned,
            OwnershipType::SoleProprietor,
        ] {
            assert_eq!(o.as_str().parse::<OwnershipType>().unwrap(), o);
        }
        assert!("cooperative".parse::<OwnershipType>().is_err());
    }

    #[test]
    fn test_category_roundtrip() {
        for c in [
            LoanCategory::SmallBusiness,
            LoanCategory::LongTerm,
            LoanCategory::Equipment,
            LoanCategory::StateProgram,
            LoanCategory::Micro,
        ] {
            assert_eq!(c.as_str().parse::<LoanCategory>().unwrap(), c);
        }
        assert!("mezzanine".parse::<LoanCategory>().is_err());
    }

    #[test]
    fn test_penalty_reason_wording() {
        assert_eq!(PenaltyReason::PaidLate.to_string(), "paid late");
        assert_eq!(PenaltyReason::InsufficientFunds.to_string(), "insufficient funds");
    }
}
