/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Enum-constrained request parameters
//!
//! Every field the API restricts to a fixed set of values is a Rust enum.
//! Parsing from a string (`FromStr` / `TryFrom<&str>`) fails with
//! [`AppError::InvalidArgument`] listing the allowed set, so bad input is
//! rejected before any network call.

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declares a wire-string enum with `as_str`, `Display`, `FromStr`,
/// `TryFrom<&str>` and string (de)serialization.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted value, in wire form
            pub const ALLOWED: &'static [&'static str] = &[$($wire),+];

            /// Every variant
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent on the wire
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(AppError::invalid_argument($field, other, Self::ALLOWED.iter())),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = AppError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Transaction type encoded in a dynamic QR code (`TrxCode`)
    QrTransactionType, "trx_code" {
        /// Pay merchant (buy goods)
        BuyGoods => "BG",
        /// Withdraw cash at agent till
        WithdrawAtAgent => "WA",
        /// Paybill or business number
        Paybill => "PB",
        /// Send money to a mobile number
        SendMoney => "SM",
        /// Send to business
        SendToBusiness => "SB",
    }
}

wire_enum! {
    /// How often a Ratiba standing order runs
    StandingOrderFrequency, "frequency" {
        /// Runs once
        OneOff => "1",
        /// Every day
        Daily => "2",
        /// Every week
        Weekly => "3",
        /// Every month
        Monthly => "4",
        /// Every two months
        BiMonthly => "5",
        /// Every three months
        Quarterly => "6",
        /// Every six months
        HalfYearly => "7",
        /// Every year
        Yearly => "8",
    }
}

wire_enum! {
    /// Kind of shortcode receiving a Ratiba standing order
    ReceiverIdentifierType, "receiver_party_identifier_type" {
        /// Till number (buy goods)
        Till => "2",
        /// Paybill number
        Paybill => "4",
    }
}

impl ReceiverIdentifierType {
    /// Ratiba `TransactionType` matching the receiver kind
    #[must_use]
    pub fn standing_order_transaction_type(&self) -> &'static str {
        match self {
            ReceiverIdentifierType::Till => "Standing Order Customer Pay Marchant",
            ReceiverIdentifierType::Paybill => "Standing Order Customer Pay Bill",
        }
    }
}

wire_enum! {
    /// `TransactionType` of an STK push
    StkTransactionType, "transaction_type" {
        /// Payment to a paybill
        CustomerPayBillOnline => "CustomerPayBillOnline",
        /// Payment to a till
        CustomerBuyGoodsOnline => "CustomerBuyGoodsOnline",
    }
}

impl Default for StkTransactionType {
    fn default() -> Self {
        StkTransactionType::CustomerPayBillOnline
    }
}

wire_enum! {
    /// What M-Pesa does when the validation URL is unreachable
    C2bResponseType, "response_type" {
        /// Complete the transaction
        Completed => "Completed",
        /// Cancel the transaction
        Cancelled => "Cancelled",
    }
}

wire_enum! {
    /// `CommandID` of a simulated C2B payment
    C2bCommandId, "command_id" {
        /// Payment to a paybill
        CustomerPayBillOnline => "CustomerPayBillOnline",
        /// Payment to a till
        CustomerBuyGoodsOnline => "CustomerBuyGoodsOnline",
    }
}

wire_enum! {
    /// `CommandID` of a B2C payment
    B2cCommandId, "command_id" {
        /// Salary payment
        SalaryPayment => "SalaryPayment",
        /// Business payment
        BusinessPayment => "BusinessPayment",
        /// Promotion payment
        PromotionPayment => "PromotionPayment",
    }
}

wire_enum! {
    /// `CommandID` of a B2B payment
    B2bCommandId, "command_id" {
        /// Pay a paybill
        BusinessPayBill => "BusinessPayBill",
        /// Pay a till
        BusinessBuyGoods => "BusinessBuyGoods",
        /// Load a B2C utility account (account top up)
        BusinessPayToBulk => "BusinessPayToBulk",
    }
}
