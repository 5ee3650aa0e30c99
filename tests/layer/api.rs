use crate::common;

pub async fn ping() {
    let body = reqwest::get(common::url())
        .await
        .expect("get")
        .text()
        .await
        .expect("text");
    assert_eq!("PONG", body);
}
