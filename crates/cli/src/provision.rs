use indicatif::{ProgressBar, ProgressStyle};
use mprov_core::{SlaveRegistry, SlaveRequest};
use mprov_master::Master;
use std::time::Duration;

const API_PORT: u16 = 8080;
const FIRST_SLAVE: u32 = 1;
const LAST_SLAVE: u32 = 3;

pub fn base_url(master: &str, https: bool) -> String {
    let scheme = if https { "https" } else { "http" };
    format!("{}://{}:{}/api", scheme, master, API_PORT)
}

/// The fixed addresses of the docker slaves, in registration order.
pub fn slave_hostnames() -> Vec<String> {
    (FIRST_SLAVE..=LAST_SLAVE)
        .map(|i| format!("10.101.202.1{:02}", i))
        .collect()
}

pub fn handle_create_slaves(master: &str, https: bool) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.green} {msg}")
            .unwrap()
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let registry = Master::new(base_url(master, https));

    let warnings = create_slaves(&registry, &spinner)?;

    if warnings == 0 {
        spinner.finish_with_message("Slaves created successfully!");
    } else {
        spinner.finish_with_message(format!(
            "Slaves created with {} activation warning(s)",
            warnings
        ));
    }
    Ok(())
}

/// Registers and activates each docker slave in order, returning the number
/// of activation warnings. A creation failure aborts the remaining slaves; a
/// failed activation is reported but never halts the run.
fn create_slaves(
    registry: &impl SlaveRegistry,
    spinner: &ProgressBar,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut warnings = 0;

    for hostname in slave_hostnames() {
        spinner.set_message(format!("Creating slave {}...", hostname));
        let details = registry.create_slave(SlaveRequest { hostname: hostname.clone() })
            .map_err(|e| Box::from(e) as Box<dyn std::error::Error>)?;

        spinner.set_message(format!("Activating slave {} (id {})...", hostname, details.id));
        match registry.activate_slave(&details) {
            Ok(outcome) => {
                spinner.println(format!(
                    "Creating slave {}: {} {}",
                    hostname, outcome.status, outcome.body
                ));
            }
            Err(e) => {
                warnings += 1;
                spinner.println(format!("Warning: failed to activate slave {}: {}", hostname, e));
            }
        }
    }

    Ok(warnings)
}
