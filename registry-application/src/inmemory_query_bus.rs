use crate::erased::{BoxAnySend, HandlerFn, erase, restore};
use crate::{
    context::AppContext, error::AppError, query::Query, query_bus::QueryBus,
    query_handler::QueryHandler,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{TypeId, type_name};
use std::sync::Arc;
use tracing::{debug, warn};

/// 基于内存的 QueryBus 实现
/// - 以查询的 TypeId 注册处理器；结果类型由 `Query::Dto` 唯一确定
/// - 以类型擦除方式调度，并在调用端还原结果
#[derive(Default)]
pub struct InMemoryQueryBus {
    handlers: DashMap<TypeId, (&'static str, HandlerFn)>,
}

impl InMemoryQueryBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<Q, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let f = erase(move |boxed_q, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                let q = boxed_q.downcast::<Q>().map_err(|_| AppError::TypeMismatch {
                    expected: type_name::<Q>(),
                    found: "unknown",
                })?;
                let dto = handler.handle(ctx, *q).await?;
                Ok::<BoxAnySend, AppError>(Box::new(dto))
            })
        });

        match self.handlers.entry(TypeId::of::<Q>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredQuery { query: Q::NAME }),
            Entry::Vacant(slot) => {
                slot.insert((Q::NAME, f));
                Ok(())
            }
        }
    }

    /// 已注册的查询名
    pub fn registered_queries(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.iter().map(|e| e.value().0).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl QueryBus for InMemoryQueryBus {
    async fn dispatch<Q>(&self, ctx: &AppContext, q: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query,
    {
        let Some(f) = self.handlers.get(&TypeId::of::<Q>()).map(|h| h.value().1.clone()) else {
            return Err(AppError::HandlerNotFound(Q::NAME));
        };

        debug!(query = Q::NAME, correlation_id = ctx.correlation(), "dispatching query");
        match (f)(Box::new(q), ctx).await {
            Ok(out) => restore::<Q::Dto>(out, type_name::<Q::Dto>()),
            Err(err) => {
                warn!(query = Q::NAME, correlation_id = ctx.correlation(), error = %err, "query failed");
                Err(err)
            }
        }
    }
}
