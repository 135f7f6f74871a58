// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{EnumIter, IntoEnumIterator};

/// Categories of numbers that get their own description in the territory
/// metadata.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberType {
    /// **Fixed-line numbers.**
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// **Mobile numbers.**
    Mobile,
    /// **Pagers.**
    /// Numbers used for sending messages to paging devices.
    Pager,
    /// **Toll-free numbers.**
    /// Calls to these numbers are paid by the recipient.
    TollFree,
    /// **Premium-rate numbers.**
    /// Charged at a higher rate than normal calls.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between caller and recipient.
    SharedCost,
    /// **Personal numbers.**
    /// Routed to a person rather than to a location or device.
    PersonalNumber,
    /// **Voice over IP (VoIP) numbers.**
    VoIP,
    /// **Universal Access Numbers (UAN).**
    UAN,
    /// **Short codes.**
    /// Numbers dialled outside of the normal numbering plan.
    ShortCode,
}

impl NumberType {
    /// Name of the element describing this type inside a `<territory>`.
    pub fn tag_name(&self) -> &'static str {
        match self {
            NumberType::FixedLine => "fixedLine",
            NumberType::Mobile => "mobile",
            NumberType::Pager => "pager",
            NumberType::TollFree => "tollFree",
            NumberType::PremiumRate => "premiumRate",
            NumberType::SharedCost => "sharedCost",
            NumberType::PersonalNumber => "personalNumber",
            NumberType::VoIP => "voip",
            NumberType::UAN => "uan",
            NumberType::ShortCode => "shortCode",
        }
    }

    pub fn from_tag_name(tag: &str) -> Option<Self> {
        NumberType::iter().find(|number_type| number_type.tag_name() == tag)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::NumberType;

    #[test]
    fn test_tag_names_round_trip() {
        assert_eq!(NumberType::iter().count(), 10);
        for number_type in NumberType::iter() {
            assert_eq!(NumberType::from_tag_name(number_type.tag_name()), Some(number_type));
        }
        assert_eq!(NumberType::from_tag_name("generalDesc"), None);
        assert_eq!(NumberType::from_tag_name("FixedLine"), None);
    }
}
