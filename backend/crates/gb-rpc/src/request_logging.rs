/// Log a handler entry point
#[macro_export]
macro_rules! log_handler_entry {
    ($ctx:expr, $handler:expr) => {
        log::debug!("{} -> {} handler", $ctx.log_prefix(), $handler);
    };
}

/// Log a handler exit with duration
#[macro_export]
macro_rules! log_handler_exit {
    ($ctx:expr, $handler:expr, $reply:expr) => {
        match $reply.kind {
            $crate::RpcResultType::Success => log::info!(
                "{} <- {} OK ({}ms)",
                $ctx.log_prefix(),
                $handler,
                $ctx.elapsed_ms()
            ),
            $crate::RpcResultType::Error => log::warn!(
                "{} <- {} ERR ({}ms)",
                $ctx.log_prefix(),
                $handler,
                $ctx.elapsed_ms()
            ),
        }
    };
}
