//! Storage URLs shared by integration tests.

const SERVICE_SAS: &str = "sv=2019-12-12&sr=b&st=2111-01-09T01:42:34.936Z&se=2222-03-09T01:42:34.936Z&sp=rw&sip=168.1.5.60-168.1.5.70&spr=https,http&si=myIdentifier&ss=bf&srt=s&sig=clNxbtnkKSHw7f3KMEVVc4agaszoRFdbZr%2FWBmPNsrw%3D";

const DELEGATION_SAS: &str = "sv=2020-02-10&sr=c&sp=rl&skoid=o&sktid=t&skt=2021-01-01T00:00:00Z&ske=2021-01-02T00:00:00Z&sks=b&skv=2020-02-10&sig=c2ln";

const HOSTS: [&str; 4] = [
    "https://acct.blob.core.windows.net",
    "http://127.0.0.1:10000/devstoreaccount1",
    "http://[::1]:10000/devstoreaccount1",
    "https://acct.blob.core.windows.net:8443",
];

const PATHS: [&str; 7] = [
    "",
    "/cont",
    "/cont/blob.txt",
    "/cont/dir/sub/blob%20name.bin",
    "/cont/._.TESTT.txt",
    "/cont/dir/../blob.txt",
    "/cont/%2E/blob.txt",
];

const QUERIES: [&str; 7] = [
    "",
    "snapshot=2011-03-09T01:42:34.9360000Z",
    "versionId=2021-10-25T05:41:32.5526810Z",
    SERVICE_SAS,
    DELEGATION_SAS,
    "comp=tags&VersionID=v&sv=2020-02-10&st=2021-01-01&se=2021-01-02T10:00Z&sig=x",
    "snapshot=s&versionid=v&timeout=30&rscd=attachment%3B%20filename%3Da.txt&sig=abc%2B%2F%3D",
];

/// Every host × path × query combination.
pub fn storage_urls() -> Vec<String> {
    let mut urls = Vec::new();
    for host in HOSTS {
        for path in PATHS {
            for query in QUERIES {
                let mut url = format!("{host}{path}");
                if !query.is_empty() {
                    url.push('?');
                    url.push_str(query);
                }
                urls.push(url);
            }
        }
    }
    urls
}
