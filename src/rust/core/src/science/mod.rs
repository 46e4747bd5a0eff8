// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
pub mod angle;
pub mod carbonation;
pub mod maturity; // age coefficient
pub mod outliers;
pub mod statistics;
pub mod strength;
