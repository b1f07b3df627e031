//! App Router

use salvo::Router;

use crate::{auth, carts, healthcheck, items, orders, users};

/// Every API route. Registration, login and the healthcheck are public; the
/// rest sit behind the bearer token middleware.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("login").post(auth::login::handler))
        .push(Router::with_path("user/create").post(users::create::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("user")
                        .push(Router::with_path("id/{id}").get(users::get::handler))
                        .push(
                            Router::with_path("{username}").get(users::find_by_username::handler),
                        ),
                )
                .push(
                    Router::with_path("item")
                        .get(items::index::handler)
                        .push(Router::with_path("name/{name}").get(items::find_by_name::handler))
                        .push(Router::with_path("{id}").get(items::get::handler)),
                )
                .push(
                    Router::with_path("cart")
                        .push(Router::with_path("addToCart").post(carts::add::handler))
                        .push(Router::with_path("removeFromCart").post(carts::remove::handler)),
                )
                .push(
                    Router::with_path("order")
                        .push(Router::with_path("submit/{username}").post(orders::submit::handler))
                        .push(
                            Router::with_path("history/{username}").get(orders::history::handler),
                        ),
                ),
        )
}
