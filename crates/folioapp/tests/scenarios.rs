//! End-to-end behaviour of the content layer, run against both store bindings.

use folioapp::api::FolioApi;
use folioapp::cache::{ContentCache, RefreshOutcome};
use folioapp::categories::{category_index, filter_by_category};
use folioapp::error::FolioError;
use folioapp::form::{BlogPostDraft, BlogPostField, FormController, SkillField};
use folioapp::model::{BlogPost, OrderKey, Skill};
use folioapp::notify::Notice;
use folioapp::store::local_store::LocalStore;
use folioapp::store::mem_backend::MemBackend;
use folioapp::store::mem_table::MemTable;
use folioapp::store::remote_store::RemoteStore;
use folioapp::store::ContentStore;

fn local() -> LocalStore<MemBackend> {
    LocalStore::with_backend(MemBackend::new())
}

fn remote() -> RemoteStore<MemTable> {
    RemoteStore::new(MemTable::new())
}

fn post(title: &str, category: &str) -> BlogPost {
    BlogPost::new(title, "An excerpt", category, "https://example.com/cover.png")
        .with_date("May 15, 2023", "5 min read")
}

fn skill_fields(name: &str, level: &str, category: &str) -> Vec<(SkillField, String)> {
    vec![
        (SkillField::Name, name.to_string()),
        (SkillField::Level, level.to_string()),
        (SkillField::Category, category.to_string()),
    ]
}

// Scenario A

fn insert_into_empty_store<S>(store: S)
where
    S: ContentStore<Skill> + ContentStore<BlogPost>,
{
    let mut api = FolioApi::new(store);
    assert!(api.list_skills(None).unwrap().listed.is_empty());

    api.add_skill(skill_fields("Go", "70", "Backend")).unwrap();

    let all: Vec<Skill> = api.store().fetch_all(OrderKey::Insertion).unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].id >= 1);
    assert_eq!(all[0].name, "Go");
    assert_eq!(all[0].level(), 70);
    assert_eq!(all[0].category, "Backend");
}

#[test]
fn scenario_a_local() {
    insert_into_empty_store(local());
}

#[test]
fn scenario_a_remote() {
    insert_into_empty_store(remote());
}

// Scenario B

fn category_selection<S: ContentStore<BlogPost>>(mut store: S) {
    store.insert(&post("Grid", "CSS")).unwrap();
    store.insert(&post("Hooks", "React")).unwrap();

    let mut cache = ContentCache::<BlogPost>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);
    cache.select_category(Some("CSS".to_string()));

    let visible = cache.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Grid");
}

#[test]
fn scenario_b_local() {
    category_selection(local());
}

#[test]
fn scenario_b_remote() {
    category_selection(remote());
}

// Scenario C

fn blank_excerpt_is_rejected<S: ContentStore<BlogPost>>(mut store: S) {
    let saved = store.insert(&post("Grid", "CSS")).unwrap();

    let mut cache = ContentCache::<BlogPost>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);

    let mut form = FormController::<BlogPostDraft>::new();
    form.edit(&saved);
    form.set(BlogPostField::Title, "Grid, revisited").unwrap();
    form.set(BlogPostField::Excerpt, "").unwrap();

    let err = form.submit(&mut store, &mut cache, &mut notices).unwrap_err();
    assert!(matches!(err, FolioError::Validation { field: "excerpt", .. }));
    assert_eq!(cache.items(), &[saved.clone()]);

    let stored: Vec<BlogPost> = store.fetch_all(OrderKey::Insertion).unwrap();
    assert_eq!(stored, vec![saved]);
}

#[test]
fn scenario_c_local() {
    blank_excerpt_is_rejected(local());
}

#[test]
fn scenario_c_remote() {
    blank_excerpt_is_rejected(remote());
}

// Scenario D

#[test]
fn scenario_d_local_outage_keeps_cache() {
    let mut store = local();
    store.insert(&Skill::new("Go", 70, "Backend")).unwrap();
    let mut cache = ContentCache::<Skill>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);

    store.backend().set_simulate_read_error(true);
    assert_eq!(cache.refresh(&store, &mut notices), RefreshOutcome::Failed);

    assert_eq!(cache.items().len(), 1);
    assert!(!cache.is_loading());
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
}

#[test]
fn scenario_d_remote_outage_keeps_cache() {
    let mut store = remote();
    store.insert(&Skill::new("Go", 70, "Backend")).unwrap();
    let mut cache = ContentCache::<Skill>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);

    store.api().set_offline(true);
    assert_eq!(cache.refresh(&store, &mut notices), RefreshOutcome::Failed);

    assert_eq!(cache.items().len(), 1);
    assert!(!cache.is_loading());
    assert!(notices.iter().any(Notice::is_error));
}

// Scenario E and delete idempotence

fn delete_missing_is_noop<S>(store: S)
where
    S: ContentStore<Skill> + ContentStore<BlogPost>,
{
    let mut api = FolioApi::new(store);
    api.add_skill(skill_fields("Go", "70", "Backend")).unwrap();
    let before = api.list_skills(None).unwrap().listed;

    let result = api.delete_skill(999, true).unwrap();
    assert!(result.affected.is_empty());
    assert!(!result.has_errors());
    assert_eq!(api.list_skills(None).unwrap().listed, before);

    let id = before[0].id;
    api.delete_skill(id, true).unwrap();
    let after_first = api.list_skills(None).unwrap().listed;
    api.delete_skill(id, true).unwrap();
    assert_eq!(api.list_skills(None).unwrap().listed, after_first);
    assert!(after_first.is_empty());
}

#[test]
fn scenario_e_local() {
    delete_missing_is_noop(local());
}

#[test]
fn scenario_e_remote() {
    delete_missing_is_noop(remote());
}

// Uniform update contract

fn update_missing_is_write_failure<S: ContentStore<Skill>>(mut store: S) {
    let err = store.update(42, &Skill::new("Go", 70, "Backend")).unwrap_err();
    assert!(matches!(err, FolioError::WriteFailure(_)));
}

#[test]
fn update_missing_local() {
    update_missing_is_write_failure(local());
}

#[test]
fn update_missing_remote() {
    update_missing_is_write_failure(remote());
}

// Properties

#[test]
fn blog_post_round_trips_between_shapes() {
    let mut api = FolioApi::new(remote());
    api.seed().unwrap();
    for post in api.list_posts(None).unwrap().listed {
        assert_eq!(post.to_db_record().to_client_record(), post);
        let row = post.to_db_record();
        assert_eq!(row.to_client_record().to_db_record(), row);
    }
}

#[test]
fn cached_skill_levels_stay_in_range() {
    let mut store = local();
    store.backend().put_raw(
        "portfolio-skills",
        r#"[{"id":1,"name":"A","level":400,"category":"x"},{"id":2,"name":"B","level":-20,"category":"y"}]"#,
    );
    let mut cache = ContentCache::<Skill>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);

    store.insert(&Skill::new("C", 1000, "z")).unwrap();
    cache.refresh(&store, &mut notices);

    assert_eq!(cache.items().len(), 3);
    assert!(cache.items().iter().all(|s| s.level() <= 100));
}

fn assert_categories_match(api: &FolioApi<LocalStore<MemBackend>>) {
    let items = api.list_skills(None).unwrap().listed;
    let mut derived = category_index(&items);
    let mut distinct: Vec<String> = items.iter().map(|s| s.category.clone()).collect();
    distinct.sort();
    distinct.dedup();
    derived.sort();
    assert_eq!(derived, distinct);
}

#[test]
fn categories_track_every_mutation() {
    let mut api = FolioApi::new(local());

    assert_categories_match(&api);
    api.add_skill(skill_fields("Go", "70", "Backend")).unwrap();
    assert_categories_match(&api);
    api.add_skill(skill_fields("React", "90", "Frontend")).unwrap();
    assert_categories_match(&api);
    api.edit_skill(1, vec![(SkillField::Category, "Languages".into())])
        .unwrap();
    assert_categories_match(&api);
    api.delete_skill(2, true).unwrap();
    assert_categories_match(&api);
    assert_eq!(api.list_skills(None).unwrap().categories.len(), 1);
}

#[test]
fn filter_is_exact_selection() {
    let mut api = FolioApi::new(local());
    api.seed().unwrap();
    let all = api.list_skills(None).unwrap().listed;

    for category in category_index(&all) {
        let visible = api.list_skills(Some(&category)).unwrap().listed;
        let expected: Vec<Skill> = filter_by_category(&all, Some(&category))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(visible, expected);
        assert!(visible.iter().all(|s| s.category == category));
    }
}

#[test]
fn double_submit_inserts_once() {
    let mut store = remote();
    let mut cache = ContentCache::<Skill>::new();
    let mut notices: Vec<Notice> = Vec::new();
    cache.mount(&store, &mut notices);

    let mut form = FormController::<folioapp::form::SkillDraft>::new();
    form.create();
    form.set(SkillField::Name, "Go").unwrap();
    form.set(SkillField::Category, "Backend").unwrap();

    let submission = form.begin_submit(&mut notices).unwrap();
    assert!(matches!(
        form.begin_submit(&mut notices),
        Err(FolioError::SubmitInFlight)
    ));
    let outcome = submission.execute(&mut store);
    form.finish_submit(submission, outcome, &store, &mut cache, &mut notices)
        .unwrap();

    assert_eq!(store.api().rows("skills").len(), 1);
    assert_eq!(cache.items()[0].level(), 50);
}
