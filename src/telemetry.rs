use std::io::Write;

use env_logger::Env;

// `time [ file:line - module() ] message`, filtered by RUST_LOG, default info
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [ {}:{} - {}() ] {}",
                buf.timestamp_seconds(),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.module_path().unwrap_or("?"),
                record.args()
            )
        })
        .init();
}
