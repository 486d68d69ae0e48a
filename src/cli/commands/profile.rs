use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::ProfileLogic;
use crate::errors::AppResult;
use crate::models::profile::UserProfile;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        company,
        last_name,
        first_name,
        middle_initial,
        program,
        section,
        assigned_task,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        let fields = [
            company,
            last_name,
            first_name,
            middle_initial,
            program,
            section,
            assigned_task,
        ];

        if fields.iter().any(|f| f.is_some()) {
            let value = |f: &Option<String>| f.clone().unwrap_or_default();
            let saved = ProfileLogic::save(
                &mut store,
                &cfg.user,
                UserProfile {
                    company_name: value(company),
                    last_name: value(last_name),
                    first_name: value(first_name),
                    middle_initial: value(middle_initial),
                    program: value(program),
                    section: value(section),
                    assigned_task: value(assigned_task),
                },
            )?;
            success(format!("Profile saved for {}.", saved.display_name()));
            return Ok(());
        }

        match ProfileLogic::show(&store, &cfg.user)? {
            Some(p) => {
                println!("🏢 Company       : {}", p.company_name);
                println!("👤 Name          : {}", p.display_name());
                println!("🎓 Program       : {}", p.program);
                println!("🏫 Section       : {}", p.section);
                println!("🛠️  Assigned task : {}", p.assigned_task);
            }
            None => warning("No profile saved yet. Use `ojtlog profile --company ...`."),
        }
    }

    Ok(())
}
