use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Error, Schema, http::GraphiQLSource};
use async_graphql_poem::GraphQL;
use poem::{Route, Server, get, handler, listener::TcpListener, web::Html};
use tracing::info;

use crate::{
    services::handler::RequestHandler,
    structures::{BusInfo, plan::RouteItinerary},
};

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[async_graphql::Object]
impl QueryRoot {
    async fn ping(&self) -> &str {
        "pong"
    }

    /// Fastest itinerary between two stops, null if there is none.
    async fn route(
        &self,
        ctx: &Context<'_>,
        from: String,
        to: String,
    ) -> Result<Option<RouteItinerary>, Error> {
        let handler = ctx.data::<Arc<RequestHandler>>()?;
        Ok(handler.build_route(&from, &to))
    }

    async fn bus(&self, ctx: &Context<'_>, name: String) -> Result<Option<BusInfo>, Error> {
        let handler = ctx.data::<Arc<RequestHandler>>()?;
        Ok(handler.bus_info(&name))
    }

    /// Buses visiting a stop, null for an unknown stop.
    async fn stop(&self, ctx: &Context<'_>, name: String) -> Result<Option<Vec<String>>, Error> {
        let handler = ctx.data::<Arc<RequestHandler>>()?;
        Ok(handler.stop_buses(&name))
    }
}

#[handler]
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn build_schema(handler: Arc<RequestHandler>) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(handler)
        .finish()
}

pub fn build_app(handler: Arc<RequestHandler>) -> Route {
    Route::new()
        .at("/graphql", GraphQL::new(build_schema(handler)))
        .at("/graphiql", get(graphiql))
}

pub async fn server(handler: Arc<RequestHandler>, listen: &str) -> std::io::Result<()> {
    let app = build_app(handler);

    info!("Serving on {listen}");
    Server::new(TcpListener::bind(listen)).run(app).await
}
