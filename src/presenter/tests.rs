use super::{AlertLog, Notifier, Popup};

#[test]
fn popup_starts_hidden_and_empty() {
    let popup = Popup::new();
    assert!(popup.is_hidden());
    assert_eq!(popup.image_source(), None);
}

#[test]
fn show_sets_source_and_reveals() {
    let mut popup = Popup::new();
    popup.show("https://x/img.jpg");
    assert!(!popup.is_hidden());
    assert_eq!(popup.image_source(), Some("https://x/img.jpg"));
}

#[test]
fn show_overwrites_previous_image() {
    let mut popup = Popup::new();
    popup.show("https://x/first.jpg");
    popup.show("https://x/second.jpg");
    assert_eq!(popup.image_source(), Some("https://x/second.jpg"));
}

#[test]
fn close_hides_but_keeps_source() {
    let mut popup = Popup::new();
    popup.close();
    assert!(popup.is_hidden());

    popup.show("https://x/img.jpg");
    popup.close();
    assert!(popup.is_hidden());
    assert_eq!(popup.image_source(), Some("https://x/img.jpg"));
}

#[test]
fn alert_log_keeps_alerts_in_order() {
    let log = AlertLog::new();
    assert_eq!(log.last(), None);
    log.alert("first");
    log.alert("second");
    assert_eq!(log.alerts(), vec!["first", "second"]);
    assert_eq!(log.last().as_deref(), Some("second"));
}
