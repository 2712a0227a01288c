/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改台账状态。
/// - `Output` 只携带新记录的标识等最少信息，不返回读模型；
/// - 命名采用动宾结构，如 `RegisterHousehold`、`DeleteDisability`。
///
/// `NAME` 为稳定名称，用于日志与路由，避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    const NAME: &'static str;

    type Output: Send + 'static;
}
