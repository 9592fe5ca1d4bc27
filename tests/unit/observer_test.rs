use std::sync::{Arc, Mutex};

use clientele::customers::models::Customer;
use clientele::customers::repositories::FileCustomerRepository;
use clientele::{ChangeEvent, CustomerRepository, RepositoryObserver, SortField};

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<ChangeEvent>>,
}

impl RepositoryObserver for RecordingObserver {
    fn update(&self, event: &ChangeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

impl RecordingObserver {
    fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }
}

fn customer(name: &str) -> Customer {
    Customer::new(0, name, "1 Main Street", "12345", "Jane Doe").unwrap()
}

#[tokio::test]
async fn add_notifies_exactly_once_with_the_add_action() {
    let observer = Arc::new(RecordingObserver::default());
    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(observer.clone());

    repo.add(customer("Acme")).await.unwrap();

    let events = observer.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action(), "add");
    match &events[0] {
        ChangeEvent::Added { id, customer } => {
            assert_eq!(*id, 1);
            assert_eq!(customer.name(), "Acme");
        }
        other => panic!("unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn removed_observer_receives_nothing() {
    let observer = Arc::new(RecordingObserver::default());
    let handle: Arc<dyn RepositoryObserver> = observer.clone();

    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(handle.clone());
    repo.remove_observer(&handle);

    repo.add(customer("Acme")).await.unwrap();
    assert!(observer.events().is_empty());
}

#[tokio::test]
async fn double_registration_counts_once() {
    let observer = Arc::new(RecordingObserver::default());
    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(observer.clone());
    repo.add_observer(observer.clone());

    repo.add(customer("Acme")).await.unwrap();
    assert_eq!(observer.events().len(), 1);
}

#[tokio::test]
async fn removing_an_unregistered_observer_is_a_no_op() {
    let registered = Arc::new(RecordingObserver::default());
    let stranger: Arc<dyn RepositoryObserver> = Arc::new(RecordingObserver::default());

    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(registered.clone());
    repo.remove_observer(&stranger);

    repo.add(customer("Acme")).await.unwrap();
    assert_eq!(registered.events().len(), 1);
}

#[tokio::test]
async fn every_mutation_kind_emits_its_event() {
    let observer = Arc::new(RecordingObserver::default());
    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(observer.clone());

    repo.add(customer("Acme")).await.unwrap();
    repo.replace_by_id(1, customer("Beta")).await.unwrap();
    repo.sort_by_field(SortField::Name, true).await.unwrap();
    repo.delete_by_id(1).await;

    let actions: Vec<&str> = observer.events().iter().map(|e| e.action()).collect();
    assert_eq!(actions, vec!["add", "replace", "sort", "delete"]);
    assert!(matches!(
        observer.events()[2],
        ChangeEvent::Sorted {
            field: SortField::Name,
            reverse: true
        }
    ));
}

#[tokio::test]
async fn failed_mutations_do_not_notify() {
    let observer = Arc::new(RecordingObserver::default());
    let mut repo = FileCustomerRepository::in_memory();
    repo.add_observer(observer.clone());

    assert!(!repo.replace_by_id(42, customer("Acme")).await.unwrap());
    assert!(!repo.delete_by_id(42).await);
    assert!(observer.events().is_empty());
}

#[tokio::test]
async fn observers_are_notified_in_registration_order() {
    struct Tagged {
        tag: usize,
        log: Arc<Mutex<Vec<usize>>>,
    }
    impl RepositoryObserver for Tagged {
        fn update(&self, _event: &ChangeEvent) {
            self.log.lock().unwrap().push(self.tag);
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut repo = FileCustomerRepository::in_memory();
    for tag in 0..3 {
        repo.add_observer(Arc::new(Tagged {
            tag,
            log: log.clone(),
        }));
    }

    repo.add(customer("Acme")).await.unwrap();
    assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
}
