// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#![feature(error_generic_member_access)]

mod build_task;
mod errors;
mod options;
mod provisioner;
mod testbed;

pub use build_task::*;
pub use errors::*;
pub use options::*;
pub use provisioner::*;
pub use testbed::*;
