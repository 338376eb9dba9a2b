use anyhow::Result;

fn main() -> Result<()> {
    #[cfg(all(feature = "logging", debug_assertions))]
    {
        tblsort::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    tblsort::start_tblsort()
}
