#![allow(dead_code)]

pub mod fake_transport;
pub mod http_server;

/// Builds an in-memory tar archive with the given entries, in order.
pub fn build_tar(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, *content).unwrap();
    }
    builder.into_inner().unwrap()
}

/// A typical OVA layout: descriptor, manifest, one disk.
pub fn sample_ova() -> Vec<u8> {
    build_tar(&[
        ("vm.ovf", b"<Envelope/>"),
        (
            "vm.mf",
            b"SHA256(vm.ovf)= 1f2e\nSHA256(vm-disk1.vmdk)= 00aa\n",
        ),
        ("vm-disk1.vmdk", b"disk-bytes"),
    ])
}
