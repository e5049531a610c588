use super::catalog::KnownSystem;
use super::paths::PackLayout;
use super::types::{BezelSystem, PackAction, PackOutcome, PackStatus, RepoRef};
use crate::blocking;
use crate::shared::fs::{copy_dir_recursive, ensure_dir, remove_dir_all_if_exists};
use std::collections::BTreeMap;
use tokio::task::JoinSet;

fn probe(layout: &PackLayout, system: KnownSystem) -> BezelSystem {
    let path = layout.system_path(system);
    let is_installed = path.exists();
    BezelSystem {
        system,
        path,
        is_installed,
    }
}

pub fn list_systems(layout: &PackLayout) -> Vec<BezelSystem> {
    KnownSystem::ALL
        .into_iter()
        .map(|system| probe(layout, system))
        .collect()
}

/// Copies a staged pack into `configs/all`. Steps run strictly in order and the first failure
/// aborts the install; files already copied are left in place.
pub fn install(
    layout: &PackLayout,
    system: &BezelSystem,
    repo: Option<&RepoRef>,
) -> Result<PackStatus, String> {
    let name = system.system.as_str();
    if system.is_installed {
        tracing::info!(system = %name, "bezel pack already installed");
        return Ok(PackStatus::AlreadyInstalled);
    }

    let repo = repo.cloned().unwrap_or_default();
    tracing::info!(
        system = %name,
        source = %repo.pack_url(system.system),
        "installing bezel pack"
    );

    let staging_dir = layout.staging_dir(system.system);
    let configs_dir = layout.configs_all_dir();

    ensure_dir(&staging_dir)?;
    ensure_dir(&configs_dir)?;
    copy_dir_recursive(&staging_dir, &configs_dir)?;
    remove_dir_all_if_exists(&staging_dir)?;

    tracing::info!(system = %name, "bezel pack installed");
    Ok(PackStatus::Installed)
}

pub fn uninstall(system: &BezelSystem) -> Result<PackStatus, String> {
    let name = system.system.as_str();
    if !system.is_installed {
        tracing::info!(system = %name, "bezel pack not installed; nothing to remove");
        return Ok(PackStatus::AlreadyAbsent);
    }

    remove_dir_all_if_exists(&system.path)?;
    tracing::info!(system = %name, path = %system.path.display(), "bezel pack removed");
    Ok(PackStatus::Uninstalled)
}

fn apply(
    layout: &PackLayout,
    repo: &RepoRef,
    system: &BezelSystem,
    action: PackAction,
) -> Result<PackStatus, String> {
    match action {
        PackAction::Install => install(layout, system, Some(repo)),
        PackAction::Uninstall => uninstall(system),
    }
}

/// Runs every job on the blocking pool at once. No ordering between jobs; one failure never
/// cancels the others. Outcomes come back in catalog order.
async fn run_batch(
    layout: PackLayout,
    repo: RepoRef,
    jobs: Vec<(BezelSystem, PackAction)>,
) -> Vec<PackOutcome> {
    let mut set = JoinSet::new();
    for (system, action) in jobs {
        let layout = layout.clone();
        let repo = repo.clone();
        set.spawn(async move {
            let name = system.system.as_str();
            let index = system.system.catalog_index();
            let result = blocking::run("bezel_pack_apply", move || {
                apply(&layout, &repo, &system, action)
            })
            .await;
            if let Err(err) = &result {
                tracing::warn!(
                    system = %name,
                    action = ?action,
                    "bezel pack operation failed: {}",
                    err
                );
            }
            (index, PackOutcome::from_result(name, action, result))
        });
    }

    let mut outcomes = Vec::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(entry) => outcomes.push(entry),
            Err(err) => tracing::error!("bezel pack task aborted: {}", err),
        }
    }
    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}

pub async fn update_all(
    layout: PackLayout,
    repo: RepoRef,
    action: PackAction,
) -> Vec<PackOutcome> {
    let snapshot = {
        let layout = layout.clone();
        blocking::run("bezel_list_systems", move || Ok(list_systems(&layout))).await
    };
    let systems = match snapshot {
        Ok(systems) => systems,
        Err(err) => {
            return KnownSystem::ALL
                .into_iter()
                .map(|s| PackOutcome::from_result(s.as_str(), action, Err(err.clone())))
                .collect();
        }
    };

    let jobs = systems.into_iter().map(|s| (s, action)).collect();
    run_batch(layout, repo, jobs).await
}

/// Applies a UI selection: `true` installs the named system's pack, `false` removes it.
/// Unknown names come back as failed outcomes instead of rejecting the whole selection, as do
/// later spellings (e.g. padded with whitespace) of a system already in the selection.
pub async fn apply_selection(
    layout: PackLayout,
    repo: RepoRef,
    selection: BTreeMap<String, bool>,
) -> Vec<PackOutcome> {
    let mut rejected = Vec::new();
    let mut picked: BTreeMap<KnownSystem, PackAction> = BTreeMap::new();
    for (name, enabled) in selection {
        let action = if enabled {
            PackAction::Install
        } else {
            PackAction::Uninstall
        };
        let Some(system) = KnownSystem::from_name(&name) else {
            rejected.push(PackOutcome::from_result(
                &name,
                action,
                Err(format!("SEC_INVALID_INPUT: unknown system={name}")),
            ));
            continue;
        };
        if picked.contains_key(&system) {
            rejected.push(PackOutcome::from_result(
                &name,
                action,
                Err(format!("SEC_INVALID_INPUT: duplicate system={name}")),
            ));
            continue;
        }
        picked.insert(system, action);
    }

    let jobs = picked
        .into_iter()
        .map(|(system, action)| (probe(&layout, system), action))
        .collect();
    let mut outcomes = run_batch(layout, repo, jobs).await;
    outcomes.extend(rejected);
    outcomes
}
