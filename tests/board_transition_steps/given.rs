//! Given steps for board transition BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::RoleSet;

#[given(r#"a user holding the roles "{names}""#)]
fn user_holding_roles(world: &mut BoardWorld, names: String) -> Result<(), eyre::Report> {
    world.roles = RoleSet::parse(names.split(',')).wrap_err("parse scenario roles")?;
    Ok(())
}

#[given("a user holding no roles")]
fn user_holding_no_roles(world: &mut BoardWorld) {
    world.roles = RoleSet::empty();
}
