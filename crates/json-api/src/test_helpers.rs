//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use emporium_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartRecord, CartUuid},
        },
        items::{
            MockItemsService,
            records::{ItemRecord, ItemUuid},
        },
        orders::{
            MockOrdersService,
            records::{OrderItemRecord, OrderRecord, OrderUuid},
        },
        users::{
            MockUsersService,
            records::{UserRecord, UserUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

/// Stands in for the auth middleware in handler tests.
#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

/// One mock per service; any call without an expectation fails the test.
#[derive(Default)]
pub(crate) struct MockServices {
    pub users: MockUsersService,
    pub items: MockItemsService,
    pub carts: MockCartsService,
    pub orders: MockOrdersService,
    pub auth: MockAuthService,
}

impl MockServices {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            users: Arc::new(self.users),
            items: Arc::new(self.items),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            auth: Arc::new(self.auth),
        })
    }

    /// Serve `route` behind a fake authenticated user.
    pub(crate) fn into_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_user)
                .push(route),
        )
    }
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    MockServices {
        auth,
        ..MockServices::default()
    }
    .into_state()
}

pub(crate) fn users_service(users: MockUsersService, route: Router) -> Service {
    MockServices {
        users,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn items_service(items: MockItemsService, route: Router) -> Service {
    MockServices {
        items,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    MockServices {
        carts,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    MockServices {
        orders,
        ..MockServices::default()
    }
    .into_service(route)
}

pub(crate) fn make_user(uuid: UserUuid, username: &str) -> UserRecord {
    UserRecord {
        uuid,
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_item(uuid: ItemUuid, name: &str, cents: i64) -> ItemRecord {
    ItemRecord {
        uuid,
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        description: Some(format!("A {name}")),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(items: Vec<ItemRecord>) -> CartRecord {
    let total = items.iter().map(|item| item.price).sum();

    CartRecord {
        uuid: CartUuid::new(),
        user_uuid: TEST_USER_UUID,
        items,
        total,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(username: &str, items: &[ItemRecord]) -> OrderRecord {
    let uuid = OrderUuid::new();

    let items: Vec<OrderItemRecord> = items
        .iter()
        .zip(0..)
        .map(|(item, position)| OrderItemRecord {
            order_uuid: uuid,
            position,
            item_uuid: item.uuid,
            name: item.name.clone(),
            price: item.price,
            description: item.description.clone(),
        })
        .collect();

    OrderRecord {
        uuid,
        user_uuid: TEST_USER_UUID,
        username: username.to_string(),
        total: items.iter().map(|item| item.price).sum(),
        items,
        created_at: Timestamp::UNIX_EPOCH,
    }
}
