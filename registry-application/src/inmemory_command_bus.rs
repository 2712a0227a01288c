use crate::erased::{BoxAnySend, HandlerFn, erase, restore};
use crate::{
    command::Command, command_bus::CommandBus, command_handler::CommandHandler,
    context::AppContext, error::AppError,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{TypeId, type_name};
use std::sync::Arc;
use tracing::{debug, warn};

/// 基于内存的 CommandBus 实现
/// - 以命令的 TypeId 注册处理器，每种命令只允许一个处理器
/// - 运行时以类型擦除（Any）方式调度
#[derive(Default)]
pub struct InMemoryCommandBus {
    handlers: DashMap<TypeId, (&'static str, HandlerFn)>,
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let f = erase(move |boxed_cmd, ctx| {
            let handler = handler.clone();
            Box::pin(async move {
                // 键与闭包同属泛型 C，正常情况下 downcast 不会失败
                let cmd = boxed_cmd.downcast::<C>().map_err(|_| AppError::TypeMismatch {
                    expected: type_name::<C>(),
                    found: "unknown",
                })?;
                let output = handler.handle(ctx, *cmd).await?;
                Ok::<BoxAnySend, AppError>(Box::new(output))
            })
        });

        match self.handlers.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(slot) => {
                slot.insert((C::NAME, f));
                Ok(())
            }
        }
    }

    /// 已注册的命令名
    pub fn registered_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.iter().map(|e| e.value().0).collect();
        names.sort_unstable();
        names
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        let Some(f) = self.handlers.get(&TypeId::of::<C>()).map(|h| h.value().1.clone()) else {
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        debug!(
            command = C::NAME,
            correlation_id = ctx.correlation(),
            idempotency_key = ctx.idempotency(),
            "dispatching command"
        );
        match (f)(Box::new(cmd), ctx).await {
            Ok(out) => restore::<C::Output>(out, type_name::<C::Output>()),
            Err(err) => {
                warn!(command = C::NAME, correlation_id = ctx.correlation(), error = %err, "command failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Bump(usize);

    impl Command for Bump {
        const NAME: &'static str = "Bump";
        type Output = usize;
    }

    struct BumpHandler {
        counter: AtomicUsize,
    }

    #[async_trait]
    impl CommandHandler<Bump> for BumpHandler {
        async fn handle(&self, _ctx: &AppContext, cmd: Bump) -> Result<usize, AppError> {
            Ok(self.counter.fetch_add(cmd.0, Ordering::SeqCst) + cmd.0)
        }
    }

    struct Reject;

    impl Command for Reject {
        const NAME: &'static str = "Reject";
        type Output = ();
    }

    struct RejectHandler;

    #[async_trait]
    impl CommandHandler<Reject> for RejectHandler {
        async fn handle(&self, _ctx: &AppContext, _cmd: Reject) -> Result<(), AppError> {
            Err(AppError::Validation("nope".into()))
        }
    }

    fn handler() -> Arc<BumpHandler> {
        Arc::new(BumpHandler {
            counter: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn dispatch_returns_handler_output() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Bump, _>(handler()).unwrap();

        let ctx = AppContext::default();
        assert_eq!(bus.dispatch(&ctx, Bump(2)).await.unwrap(), 2);
        assert_eq!(bus.dispatch(&ctx, Bump(3)).await.unwrap(), 5);
        assert_eq!(bus.registered_commands(), vec!["Bump"]);
    }

    #[tokio::test]
    async fn unregistered_command_is_not_found() {
        let bus = InMemoryCommandBus::new();
        let err = bus.dispatch(&AppContext::default(), Bump(1)).await.unwrap_err();
        assert!(matches!(err, AppError::HandlerNotFound("Bump")));
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Bump, _>(handler()).unwrap();
        let err = bus.register::<Bump, _>(handler()).unwrap_err();
        assert!(matches!(err, AppError::AlreadyRegisteredCommand { command: "Bump" }));
    }

    #[tokio::test]
    async fn handler_errors_pass_through() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Reject, _>(Arc::new(RejectHandler)).unwrap();
        let err = bus.dispatch(&AppContext::default(), Reject).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
