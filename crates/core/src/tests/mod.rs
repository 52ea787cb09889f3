// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod wizard_tests;

use szi_quote_domain::QuoteFormData;

pub fn create_valid_quote_data() -> QuoteFormData {
    QuoteFormData {
        service_type: String::from("spanish-road"),
        origin: String::from("Madrid"),
        destination: String::from("Barcelona"),
        pickup_date: String::new(),
        delivery_date: String::new(),
        weight: String::from("500"),
        length: String::new(),
        width: String::new(),
        height: String::new(),
        special_requirements: Vec::new(),
        contact_name: String::from("John Doe"),
        company_name: String::new(),
        email: String::from("john@example.com"),
        phone: String::from("+34612345678"),
    }
}
