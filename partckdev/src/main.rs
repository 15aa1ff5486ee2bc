mod application;
mod presentation;

use partck_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
