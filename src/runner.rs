// src/runner.rs
//
// The build pipeline: fetch profile → follow its two links → parse sheet and
// inventory → render. Strictly sequential; the first failure ends the run.

use crate::{
    bbcode,
    config::options::RenderOptions,
    core::Fetch,
    error::{BoxError, Result},
    model::CharacterBuild,
    progress::Progress,
    specs::{inventory, profile, sheet},
};

pub const STEPS_FROM_PROFILE: usize = 4;
pub const STEPS_FROM_PAGES: usize = 3;

/// Build the forum post for the character behind `profile_url`.
pub fn build(
    fetcher: &dyn Fetch,
    profile_url: &str,
    opts: &RenderOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<String> {
    let profile_url = profile_url.trim();
    logf!("Build: begin profile={}", profile_url);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(STEPS_FROM_PROFILE);
        p.log("Fetching profile…");
    }

    let links = fetcher
        .get(profile_url)
        .and_then(|html| profile::character_links(&html, profile_url));
    let links = match links {
        Ok(l) => l,
        Err(e) => return fail(e, progress),
    };
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("profile");
    }

    run_pages(fetcher, &links.sheet, &links.inventory, opts, progress)
}

/// Same as `build`, for when the sheet and inventory URLs are already known.
pub fn build_from_pages(
    fetcher: &dyn Fetch,
    sheet_url: &str,
    inventory_url: &str,
    opts: &RenderOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<String> {
    logf!("Build: begin sheet={} inventory={}", sheet_url, inventory_url);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STEPS_FROM_PAGES);
    }
    run_pages(fetcher, sheet_url.trim(), inventory_url.trim(), opts, progress)
}

fn run_pages(
    fetcher: &dyn Fetch,
    sheet_url: &str,
    inventory_url: &str,
    opts: &RenderOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<String> {
    match fetch_build(fetcher, sheet_url, inventory_url, progress.as_deref_mut()) {
        Ok(build) => {
            let out = bbcode::render(&build, opts);
            logf!("Build: OK ({} chars)", out.len());
            if let Some(p) = progress.as_deref_mut() {
                p.step_done("render");
                p.finish();
            }
            Ok(out)
        }
        Err(e) => fail(e, progress),
    }
}

/// Fetch and parse both pages.
pub fn fetch_build<'p>(
    fetcher: &dyn Fetch,
    sheet_url: &str,
    inventory_url: &str,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<CharacterBuild> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching character sheet…");
    }
    let sheet = sheet::parse(&fetcher.get(sheet_url)?)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("sheet");
        p.log("Fetching inventory…");
    }
    let inventory = inventory::parse(&fetcher.get(inventory_url)?)?;
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("inventory");
    }
    Ok(CharacterBuild { sheet, inventory })
}

fn fail<'p, T>(e: BoxError, progress: Option<&mut (dyn Progress + 'p)>) -> Result<T> {
    loge!("Build: {}", e);
    if let Some(p) = progress {
        p.log(&format!("Error: {e}"));
        p.finish();
    }
    Err(e)
}
