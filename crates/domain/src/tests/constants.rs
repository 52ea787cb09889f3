// Copyright (C) 2026 SZI Logistics
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_BASE_RATE, ServiceType, base_rate, base_rate_for_code};

#[test]
fn test_base_rate_known_service() {
    let rate: f64 = base_rate(ServiceType::SpanishRoad);
    assert!((rate - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_base_rate_for_code_matches_enum_rate() {
    for service in ServiceType::ALL {
        let by_code: f64 = base_rate_for_code(service.as_str());
        let by_enum: f64 = base_rate(service);
        assert!((by_code - by_enum).abs() < f64::EPSILON);
    }
}

#[test]
fn test_base_rate_for_unknown_code_falls_back_to_default() {
    let rate: f64 = base_rate_for_code("hot-air-balloon");
    assert!((rate - DEFAULT_BASE_RATE).abs() < f64::EPSILON);
}

#[test]
fn test_base_rate_for_blank_code_falls_back_to_default() {
    let rate: f64 = base_rate_for_code("");
    assert!((rate - DEFAULT_BASE_RATE).abs() < f64::EPSILON);
}
