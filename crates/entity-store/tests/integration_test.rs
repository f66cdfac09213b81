use entity_store::mock::MockStore;
use entity_store::{Applied, Schema, StoreActor, StoreError};
use std::collections::BTreeMap;

// --- Test Schema ---

#[derive(Clone, Debug, Default)]
struct Registry {
    names: BTreeMap<u32, String>,
    next_id: u32,
}

#[derive(Debug)]
enum RegistryQuery {
    ById(u32),
    Count,
}

#[derive(Debug, PartialEq)]
enum RegistryOutput {
    Name(Option<String>),
    Count(usize),
}

#[derive(Debug)]
enum RegistryMutation {
    Insert(String),
    Remove(u32),
}

#[derive(Debug, thiserror::Error)]
enum RegistryError {
    #[error("duplicate name: {0}")]
    Duplicate(String),
}

impl Schema for Registry {
    type Query = RegistryQuery;
    type Output = RegistryOutput;
    type Mutation = RegistryMutation;
    type Key = u32;
    type Error = RegistryError;

    fn query(&self, query: RegistryQuery) -> Result<RegistryOutput, RegistryError> {
        Ok(match query {
            RegistryQuery::ById(id) => RegistryOutput::Name(self.names.get(&id).cloned()),
            RegistryQuery::Count => RegistryOutput::Count(self.names.len()),
        })
    }

    fn apply(&mut self, mutation: RegistryMutation) -> Result<Applied<u32>, RegistryError> {
        match mutation {
            RegistryMutation::Insert(name) => {
                if self.names.values().any(|n| *n == name) {
                    return Err(RegistryError::Duplicate(name));
                }
                self.next_id += 1;
                self.names.insert(self.next_id, name);
                Ok(Applied::inserted(1, self.next_id))
            }
            RegistryMutation::Remove(id) => Ok(match self.names.remove(&id) {
                Some(_) => Applied::rows(1),
                None => Applied::none(),
            }),
        }
    }
}

fn spawn_registry() -> (entity_store::StoreClient<Registry>, tokio::task::JoinHandle<()>) {
    let (actor, client) = StoreActor::new(8, Registry::default());
    (client, tokio::spawn(actor.run()))
}

// --- Tests ---

#[tokio::test]
async fn test_commit_assigns_keys_in_order() {
    let (client, handle) = spawn_registry();

    let receipts = client
        .commit(vec![
            RegistryMutation::Insert("alpha".into()),
            RegistryMutation::Insert("beta".into()),
        ])
        .await
        .unwrap();

    assert_eq!(receipts, vec![Applied::inserted(1, 1), Applied::inserted(1, 2)]);
    assert_eq!(
        client.query(RegistryQuery::ById(2)).await.unwrap(),
        RegistryOutput::Name(Some("beta".into()))
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_commit_leaves_state_untouched() {
    let (client, handle) = spawn_registry();
    client
        .commit(vec![RegistryMutation::Insert("alpha".into())])
        .await
        .unwrap();

    // Second insert in the batch collides; the first must not land either.
    let result = client
        .commit(vec![
            RegistryMutation::Insert("gamma".into()),
            RegistryMutation::Insert("alpha".into()),
        ])
        .await;

    match result {
        Err(StoreError::Schema(e)) => assert_eq!(e.to_string(), "duplicate name: alpha"),
        other => panic!("expected schema error, got {other:?}"),
    }
    assert_eq!(
        client.query(RegistryQuery::Count).await.unwrap(),
        RegistryOutput::Count(1)
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_removing_missing_row_touches_nothing() {
    let (client, handle) = spawn_registry();

    let receipts = client.commit(vec![RegistryMutation::Remove(42)]).await.unwrap();
    assert_eq!(receipts, vec![Applied::none()]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_commits_are_serialized() {
    let (client, handle) = spawn_registry();

    let mut tasks = vec![];
    for i in 0..20 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client
                .commit(vec![RegistryMutation::Insert(format!("name_{i}"))])
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(
        client.query(RegistryQuery::Count).await.unwrap(),
        RegistryOutput::Count(20)
    );

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_store_reports_error() {
    let (actor, client) = StoreActor::new(1, Registry::default());
    drop(actor);

    let result = client.query(RegistryQuery::Count).await;
    assert!(matches!(result, Err(StoreError::StoreClosed)));
}

#[tokio::test]
async fn test_mock_store_scripts_answers() {
    let mut mock = MockStore::<Registry>::new();
    mock.expect_query().return_ok(RegistryOutput::Count(3));
    mock.expect_commit()
        .return_err(StoreError::Schema("disk full".into()));

    let client = mock.client();
    assert_eq!(
        client.query(RegistryQuery::Count).await.unwrap(),
        RegistryOutput::Count(3)
    );
    assert!(client
        .commit(vec![RegistryMutation::Remove(1)])
        .await
        .is_err());

    mock.verify();
}

#[tokio::test]
async fn test_mock_store_mismatch_drops_response() {
    let mut mock = MockStore::<Registry>::new();
    mock.expect_commit().return_ok(vec![]);

    let result = mock.client().query(RegistryQuery::Count).await;
    assert!(matches!(result, Err(StoreError::StoreDropped)));
}
