use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use videomd::{
    compression, create_videomd, file_data, frame, track, video_info, Attrs, Element,
    FileDataOpts, FrameParams, Params, RateAttrs, TrackOpts, VideoInfoParams, VideomdParts,
    XmlSerializer,
};

fn build_videomd() -> Element {
    let mut rate_attrs = Attrs::new();
    rate_attrs
        .set("maximum", "10")
        .set("minimum", "6")
        .set("unit", "Mbps");

    let mut track_params = Params::new();
    track_params
        .set("duration", "PT1H30M")
        .set("bitsPerSample", "24")
        .set("frameRate", "24")
        .set("sampling", "4:2:0");
    let track = track(
        track_params,
        TrackOpts {
            num: Some("1".to_string()),
            track_type: Some("video".to_string()),
            ..Default::default()
        },
    )
    .unwrap();

    let mut params = Params::new();
    params
        .set("duration", "PT1H30M")
        .set("bitsPerSample", "24")
        .set("color", "Color")
        .set("compression", compression(None, None, Some("FFV1"), Some("lossless")))
        .set("dataRate", "8")
        .set("track", track)
        .set("frame", frame(&FrameParams {
            pixels_horizontal: Some("1920".to_string()),
            pixels_vertical: Some("1080".to_string()),
            ..Default::default()
        }))
        .set("frameRate", "24")
        .set("signalFormat", "PAL");

    let file_data = file_data(
        params,
        FileDataOpts {
            rates: RateAttrs {
                data_rate: Some(rate_attrs),
                ..Default::default()
            },
            ..Default::default()
        },
    )
    .unwrap();

    let video_info = video_info(VideoInfoParams {
        aspect_ratio: Some("16:9".to_string()),
        duration: Some("PT1H30M".to_string()),
        ..Default::default()
    });

    create_videomd(VideomdParts {
        file_data: Some(file_data),
        video_info: Some(video_info),
        ..Default::default()
    })
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_videomd", |b| b.iter(|| black_box(build_videomd())));
}

fn bench_serialize(c: &mut Criterion) {
    let videomd = build_videomd();
    let serializer = XmlSerializer::new();

    c.bench_function("serialize_videomd", |b| {
        b.iter(|| serializer.serialize(black_box(&videomd)).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_serialize);
criterion_main!(benches);
