//! End-to-end queries against the bundled skirmish map.

mod common;

use anyhow::{ensure, Context, Result};
use common::{member_ids, object, skirmish};
use fieldsense::{
    area_secure, count_structures_in_area, enum_droids, find_clusters, make_group, make_pos,
    within_area, EntityId, PlayerFilter, Position, ResolveError,
};
use rstest::rstest;

#[rstest]
fn enemy_droids_are_listed_player_by_player() -> Result<()> {
    let (config, world) = skirmish()?;
    let ids: Vec<u32> = enum_droids(&world, &config, PlayerFilter::Enemies)
        .iter()
        .map(|o| o.id.into_inner())
        .collect();
    ensure!(ids == vec![10, 11, 12, 13, 14, 15], "unexpected enemies {ids:?}");
    Ok(())
}

#[rstest]
#[case("enemyCamp", None, vec![10, 11, 12])]
#[case("ambushPoint", None, vec![11])]
#[case("outpost", None, vec![14, 15])]
#[case("outpost", Some(PlayerFilter::Player(3)), vec![14])]
#[case("playerBase", Some(PlayerFilter::Allies), vec![4])]
#[case("playerBase", None, vec![])]
fn labelled_shapes_become_groups(
    #[case] label: &str,
    #[case] filter: Option<PlayerFilter>,
    #[case] expected: Vec<u32>,
) -> Result<()> {
    let (config, mut world) = skirmish()?;
    let group = make_group(&mut world, &config, label, filter)?;
    let members = member_ids(&world, group);
    ensure!(members == expected, "{label}: expected {expected:?}, got {members:?}");
    Ok(())
}

#[rstest]
fn group_of_a_group_reuses_its_members() -> Result<()> {
    let (config, mut world) = skirmish()?;
    let camp = make_group(&mut world, &config, "enemyCamp", None)?;
    let copy = make_group(&mut world, &config, camp, None)?;
    ensure!(camp != copy, "a fresh group should be created");
    ensure!(member_ids(&world, copy) == vec![10, 11, 12]);
    Ok(())
}

#[rstest]
fn unknown_label_creates_no_group() -> Result<()> {
    let (config, mut world) = skirmish()?;
    let before = make_group(&mut world, &config, "enemyCamp", None)?;
    let err = make_group(&mut world, &config, "nowhere", None);
    ensure!(err == Err(ResolveError::UnknownLabel("nowhere".into())));
    let after = make_group(&mut world, &config, "enemyCamp", None)?;
    ensure!(
        after.0 == before.0 + 1,
        "failed build must not consume a group id: {before:?} then {after:?}"
    );
    Ok(())
}

#[rstest]
fn labels_resolve_to_positions() -> Result<()> {
    let (_, world) = skirmish()?;
    let hq = make_pos(&world, "commandCentre")?;
    ensure!(hq == Position::new(10, 10).with_id(EntityId(1)), "got {hq:?}");
    ensure!(make_pos(&world, "enemyCamp")? == Position::new(40, 40));
    ensure!(make_pos(&world, "outpost")? == Position::new(80, 15));
    ensure!(make_pos(&world, "ambushPoint")? == Position::new(41, 42));
    ensure!(make_pos(&world, "reinforcements")? == Position::new(60, 30));
    Ok(())
}

#[rstest]
fn live_objects_are_located_in_areas() -> Result<()> {
    let (_, world) = skirmish()?;
    let raider = object(&world, 11)?;
    ensure!(within_area(&world, raider, "enemyCamp")?);
    ensure!(!within_area(&world, raider, "playerBase")?);
    ensure!(within_area(&world, "commandCentre", "playerBase")?);
    ensure!(matches!(
        within_area(&world, raider, "outpost"),
        Err(ResolveError::NotAnArea(_))
    ));
    Ok(())
}

#[rstest]
#[case("playerBase", 0, true)]
#[case("enemyCamp", 0, false)]
#[case("enemyCamp", 2, true)]
#[case("enemyCamp", 3, true)]
#[case("playerBase", 2, false)]
fn area_security_respects_alliances(
    #[case] label: &str,
    #[case] player: i32,
    #[case] expected: bool,
) -> Result<()> {
    let (_, world) = skirmish()?;
    let secure = area_secure(&world, label, player)?;
    ensure!(secure == expected, "{label} for {player}: got {secure}");
    Ok(())
}

#[rstest]
fn walls_do_not_count_as_structures() -> Result<()> {
    let (config, world) = skirmish()?;
    ensure!(count_structures_in_area(&world, &config, "playerBase", None)? == 2);
    ensure!(count_structures_in_area(&world, &config, "playerBase", Some(2))? == 0);
    Ok(())
}

#[rstest]
fn enemy_forces_form_two_concentrations() -> Result<()> {
    let (config, world) = skirmish()?;
    let droids = enum_droids(&world, &config, PlayerFilter::Enemies);
    let clusters = find_clusters(&droids, 8.0);
    ensure!(clusters.clusters.len() == 2, "got {:?}", clusters.clusters);
    ensure!(clusters.max_idx == 0 && clusters.max_count == 4);

    let camp = clusters.largest().context("camp cluster")?;
    let ids: Vec<u32> = camp.members.iter().map(|o| o.id.into_inner()).collect();
    ensure!(ids == vec![10, 11, 12, 13], "camp members {ids:?}");
    ensure!(camp.centroid == Position::new(41, 40), "camp centre {:?}", camp.centroid);
    let outpost = clusters.clusters.get(1).context("outpost cluster")?;
    ensure!(outpost.centroid == Position::new(80, 15));
    Ok(())
}

#[rstest]
fn destroyed_droids_leave_their_groups() -> Result<()> {
    let (config, mut world) = skirmish()?;
    let camp = make_group(&mut world, &config, "enemyCamp", None)?;
    ensure!(world.remove_object(EntityId(11)).is_some());
    ensure!(member_ids(&world, camp) == vec![10, 12]);
    Ok(())
}
