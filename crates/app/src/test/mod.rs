//! Shared test infrastructure for service-level tests.

mod helpers;

use uuid::Uuid;

use crate::domain::items::records::ItemUuid;

pub(crate) use context::TestContext;
pub(crate) use helpers::*;

/// "Round Widget", seeded at 2.99 by the catalog migration.
pub(crate) const ROUND_WIDGET: ItemUuid =
    ItemUuid::from_uuid(Uuid::from_u128(0x01950000_0000_7000_8000_000000000001));

/// "Square Widget", seeded at 1.99 by the catalog migration.
pub(crate) const SQUARE_WIDGET: ItemUuid =
    ItemUuid::from_uuid(Uuid::from_u128(0x01950000_0000_7000_8000_000000000002));
