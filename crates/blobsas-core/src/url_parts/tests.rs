//! Parse/print tests for storage URLs.

use super::*;

const SAMPLE_SAS: &str = "sv=2019-12-12&sr=b&st=2111-01-09T01:42:34.936Z&se=2222-03-09T01:42:34.936Z&sp=rw&sip=168.1.5.60-168.1.5.70&spr=https,http&si=myIdentifier&ss=bf&srt=s&sig=clNxbtnkKSHw7f3KMEVVc4agaszoRFdbZr%2FWBmPNsrw%3D";

fn reparsed(parts: &UrlParts) -> UrlParts {
    UrlParts::parse(&parts.to_string()).unwrap()
}

#[test]
fn parse_versioned_blob_with_sas() {
    let parts = UrlParts::parse(
        "https://acct.blob.core.windows.net/cont/blob.txt?versionId=2021-10-25T05:41:32.5526810Z&sv=2019-12-12&sr=b&sp=r&sig=abc123",
    )
    .unwrap();
    assert_eq!(parts.scheme, "https");
    assert_eq!(parts.host, "acct.blob.core.windows.net");
    assert_eq!(parts.account_name, "");
    assert_eq!(parts.container_name, "cont");
    assert_eq!(parts.blob_name, "blob.txt");
    assert_eq!(parts.version_id, "2021-10-25T05:41:32.5526810Z");
    assert_eq!(parts.snapshot, "");
    assert_eq!(parts.sas.version(), "2019-12-12");
    assert_eq!(parts.sas.resource(), "b");
    assert_eq!(parts.sas.permissions(), "r");
    assert_eq!(parts.sas.signature(), "abc123");
    assert_eq!(parts.unparsed_params, "");
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn parse_blob_names_with_dots_and_directories() {
    for file_name in ["/._.TESTT.txt", "/.gitignore/dummyfile1"] {
        let url = format!(
            "https://fakestorageaccount.blob.core.windows.net/fakecontainer{file_name}?versionId=2021-10-25T05:41:32.5526810Z&{SAMPLE_SAS}"
        );
        let parts = UrlParts::parse(&url).unwrap();
        assert_eq!(parts.host, "fakestorageaccount.blob.core.windows.net");
        assert_eq!(parts.container_name, "fakecontainer");
        assert_eq!(parts.blob_name, &file_name[1..]);
        assert_eq!(parts.version_id, "2021-10-25T05:41:32.5526810Z");
        assert_eq!(parts.sas.signature(), "clNxbtnkKSHw7f3KMEVVc4agaszoRFdbZr/WBmPNsrw=");
        assert_eq!(reparsed(&parts), parts);
    }
}

#[test]
fn parse_snapshot_blob() {
    let url = format!(
        "https://fakestorageaccount.blob.core.windows.net/fakecontainer/f.txt?snapshot=2011-03-09T01:42:34Z&{SAMPLE_SAS}"
    );
    let parts = UrlParts::parse(&url).unwrap();
    assert_eq!(parts.snapshot, "2011-03-09T01:42:34Z");
    assert_eq!(parts.version_id, "");
    assert_eq!(parts.sas.identifier(), "myIdentifier");
    assert!(!parts.to_string().contains("versionid"));
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn version_id_key_matches_any_case() {
    for key in ["versionId", "versionID", "VERSIONID", "versionid"] {
        let parts =
            UrlParts::parse(&format!("https://a.blob.core.windows.net/c/b?{key}=X&comp=tags"))
                .unwrap();
        assert_eq!(parts.version_id, "X");
        assert_eq!(parts.unparsed_params, "comp=tags");
    }
}

#[test]
fn snapshot_key_matches_any_case() {
    let parts =
        UrlParts::parse("https://a.blob.core.windows.net/c/b?Snapshot=S1&SNAPSHOT=S2").unwrap();
    assert!(parts.snapshot == "S1" || parts.snapshot == "S2");
    assert_eq!(parts.unparsed_params, "");
}

#[test]
fn snapshot_and_version_are_both_emitted() {
    let mut parts = UrlParts::parse("https://a.blob.core.windows.net/c/b").unwrap();
    parts.snapshot = "2011-03-09T01:42:34.9360000Z".to_string();
    parts.version_id = "2021-10-25T05:41:32.5526810Z".to_string();
    assert_eq!(
        parts.to_string(),
        "https://a.blob.core.windows.net/c/b?versionid=2021-10-25T05:41:32.5526810Z\
         &snapshot=2011-03-09T01:42:34.9360000Z"
    );
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn query_is_unparsed_then_version_then_snapshot_then_sas() {
    let parts = UrlParts::parse(
        "https://a.blob.core.windows.net/c/b?sig=s&snapshot=S&zz=1&sv=2020-02-10&versionid=V&comp=x",
    )
    .unwrap();
    assert_eq!(parts.unparsed_params, "comp=x&zz=1");
    assert_eq!(
        parts.to_string(),
        "https://a.blob.core.windows.net/c/b?comp=x&zz=1&versionid=V&snapshot=S&sv=2020-02-10&sig=s"
    );
}

#[test]
fn snapshot_falls_back_to_sas_snapshot_time() {
    let mut parts = UrlParts::parse("https://a.blob.core.windows.net/c/b").unwrap();
    parts.sas = crate::sas::SasQueryParameters::parse_token(
        "sv=2020-02-10&snapshot=2011-03-09T01:42:34.1234567Z",
    );
    assert_eq!(
        parts.to_string(),
        "https://a.blob.core.windows.net/c/b?snapshot=2011-03-09T01:42:34.1234567Z&sv=2020-02-10"
    );
}

#[test]
fn ip_endpoint_style_takes_account_from_path() {
    let parts =
        UrlParts::parse("http://127.0.0.1:10000/devstoreaccount1/cont/dir/blob.bin").unwrap();
    assert!(parts.is_ip_endpoint_style());
    assert_eq!(parts.host, "127.0.0.1:10000");
    assert_eq!(parts.account_name, "devstoreaccount1");
    assert_eq!(parts.container_name, "cont");
    assert_eq!(parts.blob_name, "dir/blob.bin");
    assert_eq!(
        parts.to_string(),
        "http://127.0.0.1:10000/devstoreaccount1/cont/dir/blob.bin"
    );
}

#[test]
fn ip_endpoint_style_account_only() {
    let parts = UrlParts::parse("http://[::1]:10000/devstoreaccount1").unwrap();
    assert!(parts.is_ip_endpoint_style());
    assert_eq!(parts.host, "[::1]:10000");
    assert_eq!(parts.account_name, "devstoreaccount1");
    assert_eq!(parts.container_name, "");
    assert_eq!(parts.to_string(), "http://[::1]:10000/devstoreaccount1");
}

#[test]
fn dns_host_keeps_first_segment_as_container() {
    let parts = UrlParts::parse("https://acct.blob.core.windows.net/cont").unwrap();
    assert!(!parts.is_ip_endpoint_style());
    assert_eq!(parts.account_name, "");
    assert_eq!(parts.container_name, "cont");
    assert_eq!(parts.blob_name, "");
}

#[test]
fn account_root_url() {
    let parts = UrlParts::parse("https://acct.blob.core.windows.net/?comp=list").unwrap();
    assert_eq!(parts.container_name, "");
    assert_eq!(parts.unparsed_params, "comp=list");
    assert_eq!(
        parts.to_string(),
        "https://acct.blob.core.windows.net?comp=list"
    );
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn escaped_blob_names_round_trip() {
    let parts =
        UrlParts::parse("https://a.blob.core.windows.net/c/my%20dir/caf%C3%A9%3F.txt").unwrap();
    assert_eq!(parts.blob_name, "my dir/café?.txt");
    assert_eq!(
        parts.to_string(),
        "https://a.blob.core.windows.net/c/my%20dir/caf%C3%A9%3F.txt"
    );
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn invalid_url_is_an_error() {
    let err = UrlParts::parse("https://a.blob.core.windows.net:99999/c").unwrap_err();
    assert!(matches!(
        err,
        UrlPartsError::InvalidUrl {
            source: url::ParseError::InvalidPort,
            ..
        }
    ));
    assert!("http://[::1/c".parse::<UrlParts>().is_err());
    assert!(UrlParts::parse("//[::1/c").is_err());
}

#[test]
fn malformed_sas_is_not_an_error() {
    let parts =
        UrlParts::parse("https://a.blob.core.windows.net/c/b?st=garbage&sip=x-y&sv=1").unwrap();
    assert!(parts.sas.start_time().is_none());
    assert!(parts.sas.ip_range().is_empty());
    assert_eq!(parts.unparsed_params, "");
    assert_eq!(parts.to_string(), "https://a.blob.core.windows.net/c/b?sv=1");
}

#[test]
fn with_snapshot_and_version_helpers() {
    let base = "https://a.blob.core.windows.net/c/b?sv=1&sig=s";
    assert_eq!(
        with_snapshot(base, "2011-03-09T01:42:34.9360000Z").unwrap(),
        "https://a.blob.core.windows.net/c/b?snapshot=2011-03-09T01:42:34.9360000Z&sv=1&sig=s"
    );
    let versioned = with_version_id(base, "V1").unwrap();
    assert_eq!(
        versioned,
        "https://a.blob.core.windows.net/c/b?versionid=V1&sv=1&sig=s"
    );
    assert_eq!(
        with_version_id(&versioned, "").unwrap(),
        "https://a.blob.core.windows.net/c/b?sv=1&sig=s"
    );
    assert!(with_snapshot("http://[::1/c", "x").is_err());
}

#[test]
fn dot_segments_stay_in_the_blob_name() {
    for url in [
        "https://a.blob.core.windows.net/c/dir/../x.txt",
        "https://a.blob.core.windows.net/c/dir/%2E%2E/x.txt",
    ] {
        let parts = UrlParts::parse(url).unwrap();
        assert_eq!(parts.container_name, "c");
        assert_eq!(parts.blob_name, "dir/../x.txt");
        assert_eq!(
            parts.to_string(),
            "https://a.blob.core.windows.net/c/dir/%2E%2E/x.txt"
        );
        assert_eq!(reparsed(&parts), parts);
    }
}

#[test]
fn dot_only_names_are_escaped_on_output() {
    let parts = UrlParts {
        scheme: "https".to_string(),
        host: "a.blob.core.windows.net".to_string(),
        container_name: "c".to_string(),
        blob_name: "./a/../..".to_string(),
        ..Default::default()
    };
    assert_eq!(
        parts.to_string(),
        "https://a.blob.core.windows.net/c/%2E/a/%2E%2E/%2E%2E"
    );
    assert_eq!(reparsed(&parts), parts);

    let dotted = UrlParts::parse("https://a.blob.core.windows.net/c/.../..a").unwrap();
    assert_eq!(dotted.blob_name, ".../..a");
    assert_eq!(
        dotted.to_string(),
        "https://a.blob.core.windows.net/c/.../..a"
    );
}

#[test]
fn relative_reference_keeps_path_and_query() {
    let parts = UrlParts::parse("/cont/blob.txt?sv=2019-12-12&sig=x&comp=tags").unwrap();
    assert_eq!(parts.scheme, "");
    assert_eq!(parts.host, "");
    assert_eq!(parts.container_name, "cont");
    assert_eq!(parts.blob_name, "blob.txt");
    assert_eq!(parts.sas.version(), "2019-12-12");
    assert_eq!(parts.sas.signature(), "x");
    assert_eq!(parts.unparsed_params, "comp=tags");
    assert_eq!(parts.to_string(), "/cont/blob.txt?comp=tags&sv=2019-12-12&sig=x");
    assert_eq!(reparsed(&parts), parts);
}

#[test]
fn scheme_relative_reference_keeps_host() {
    let parts = UrlParts::parse("//127.0.0.1:10000/devstoreaccount1/cont/b").unwrap();
    assert_eq!(parts.scheme, "");
    assert_eq!(parts.host, "127.0.0.1:10000");
    assert_eq!(parts.account_name, "devstoreaccount1");
    assert_eq!(parts.container_name, "cont");
    assert_eq!(parts.blob_name, "b");
    assert_eq!(parts.to_string(), "//127.0.0.1:10000/devstoreaccount1/cont/b");
}
